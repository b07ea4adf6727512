//! Astrophysical system parameter bundle seeding each evaluation round

use crate::catalogue::SystemRecord;
use crate::params::ParameterMap;

/// Full parameter bundle for one astrophysical system.
///
/// Defaults describe the SGR 1745-2900 magnetar. [`Self::to_params`]
/// produces the parameter map handed to every term; the key names form the
/// shared vocabulary of the term library.
#[derive(Debug, Clone)]
pub struct AstrophysicalSystem {
    pub name: String,

    // Mass and geometry
    pub mass: f64,        // M, total mass (kg)
    pub dark_mass: f64,   // M_DM, dark matter mass (kg)
    pub radius: f64,      // r, characteristic radius (m)
    pub surface_radius: f64, // Rs (m)
    pub volume: f64,      // Vsys (m^3)

    // Magnetic fields
    pub surface_field: f64,  // Bs_t (T)
    pub critical_field: f64, // Bcrit (T)

    // Rotation and dynamics
    pub rotation: f64,  // omega_s (rad/s)
    pub expansion: f64, // vexp (m/s)
    pub age: f64,       // t, system age (s)

    // Vacuum energy densities
    pub evac_nebular: f64, // Evac_neb (J/m^3)
    pub evac_ism: f64,     // Evac_ISM (J/m^3)
    pub evac_delta: f64,   // Delta_Evac (J/m^3)

    // Resonance frequencies
    pub f_dpm: f64,
    pub f_thz: f64,
    pub f_quantum: f64,
    pub f_aether: f64,
    pub f_fluid: f64,
    pub f_react: f64,

    // Coupling constants
    pub f_super: f64,
    pub ua_scm: f64,
    pub omega_internal: f64, // omega_i (rad/s)
    pub k4_res: f64,
    pub f_trz: f64,
    pub c_res: f64, // resonance speed (m/s)

    // Rotation parameters
    pub inertia: f64,   // I (kg*m^2)
    pub flux_area: f64, // A (m^2)
    pub omega1: f64,
    pub omega2: f64,

    // Wormhole parameters
    pub throat_radius: f64, // b (m)
    pub f_worm: f64,

    // Hubble parameter
    pub hubble: f64, // H_z (1/s)
}

impl Default for AstrophysicalSystem {
    fn default() -> Self {
        Self::sgr1745()
    }
}

impl AstrophysicalSystem {
    /// SGR 1745-2900 magnetar defaults.
    pub fn sgr1745() -> Self {
        Self {
            name: "SGR1745".to_string(),

            mass: 2.8e30,
            dark_mass: 1.4e30,
            radius: 1.2e4,
            surface_radius: 1.2e4,
            volume: 1e56,

            surface_field: 1e15,
            critical_field: 4.4e13,

            rotation: 1e-8,
            expansion: 1e6,
            age: 1e10,

            evac_nebular: 7.09e-36,
            evac_ism: 7.09e-37,
            evac_delta: 6.381e-36,

            f_dpm: 1e12,
            f_thz: 1e12,
            f_quantum: 1.445e-17,
            f_aether: 1.576e-35,
            f_fluid: 1e6,
            f_react: 1e10,

            f_super: 6.287e-19,
            ua_scm: 10.0,
            omega_internal: 1e-8,
            k4_res: 1.0,
            f_trz: 0.1,
            c_res: 3e8,

            inertia: 1e45,
            flux_area: 7e22,
            omega1: 1e-8,
            omega2: 5e-9,

            throat_radius: 1.0,
            f_worm: 1.0,

            hubble: 2.270e-18,
        }
    }

    /// Overlay a catalogue record onto this bundle, keeping defaults for
    /// everything the record does not carry. Zero-valued record fields are
    /// skipped (the catalogue's "unknown" default record is all zeros).
    pub fn apply_record(&mut self, record: &SystemRecord) {
        self.name = record.name.clone();
        if record.mass > 0.0 {
            self.mass = record.mass;
        }
        if record.radius > 0.0 {
            self.radius = record.radius;
            self.surface_radius = record.radius;
        }
        if record.magnetic_field > 0.0 {
            self.surface_field = record.magnetic_field;
        }
        if record.system_volume > 0.0 {
            self.volume = record.system_volume;
        }
        if record.dark_matter_mass > 0.0 {
            self.dark_mass = record.dark_matter_mass;
        }
        if record.vacuum_energy_density > 0.0 {
            self.evac_nebular = record.vacuum_energy_density;
        }
    }

    /// Build the parameter map one evaluation round reads.
    pub fn to_params(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("M", self.mass);
        params.insert("M_DM", self.dark_mass);
        params.insert("r", self.radius);
        params.insert("Rs", self.surface_radius);
        params.insert("Vsys", self.volume);
        params.insert("Bs_t", self.surface_field);
        params.insert("Bcrit", self.critical_field);
        params.insert("omega_s", self.rotation);
        params.insert("vexp", self.expansion);
        params.insert("t", self.age);
        params.insert("Evac_neb", self.evac_nebular);
        params.insert("Evac_ISM", self.evac_ism);
        params.insert("Delta_Evac", self.evac_delta);
        params.insert("fDPM", self.f_dpm);
        params.insert("fTHz", self.f_thz);
        params.insert("fquantum", self.f_quantum);
        params.insert("fAether", self.f_aether);
        params.insert("ffluid", self.f_fluid);
        params.insert("freact", self.f_react);
        params.insert("Fsuper", self.f_super);
        params.insert("UA_SCM", self.ua_scm);
        params.insert("omega_i", self.omega_internal);
        params.insert("k4_res", self.k4_res);
        params.insert("fTRZ", self.f_trz);
        params.insert("c_res", self.c_res);
        params.insert("I", self.inertia);
        params.insert("A", self.flux_area);
        params.insert("omega1", self.omega1);
        params.insert("omega2", self.omega2);
        params.insert("b", self.throat_radius);
        params.insert("f_worm", self.f_worm);
        params.insert("H_z", self.hubble);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sgr1745() {
        let sys = AstrophysicalSystem::default();
        assert_eq!(sys.name, "SGR1745");
        assert_eq!(sys.mass, 2.8e30);
        assert_eq!(sys.surface_field, 1e15);
    }

    #[test]
    fn test_to_params_carries_full_key_set() {
        let params = AstrophysicalSystem::default().to_params();
        assert_eq!(params.len(), 32);
        assert_eq!(params.get("M"), Some(2.8e30));
        assert_eq!(params.get("Vsys"), Some(1e56));
        assert_eq!(params.get("H_z"), Some(2.270e-18));
    }

    #[test]
    fn test_apply_record_skips_zero_fields() {
        let mut sys = AstrophysicalSystem::default();
        let record = SystemRecord {
            name: "Sagittarius A*".to_string(),
            mass: 8.155e36,
            ..SystemRecord::default()
        };
        sys.apply_record(&record);

        assert_eq!(sys.mass, 8.155e36);
        // Untouched by the all-zero remainder of the record.
        assert_eq!(sys.radius, 1.2e4);
        assert_eq!(sys.surface_field, 1e15);
    }
}
