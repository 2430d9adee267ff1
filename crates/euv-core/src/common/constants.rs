//! Physical and regression constants shared by the proxy transforms.

/// Photon energy-wavelength product in eV·Å.
pub const HC_EV_ANGSTROM: f64 = 12_400.0;
/// Electron-volt to erg conversion.
pub const EV_TO_ERG: f64 = 1.602_192e-12;
/// Hydrogen Lyman-alpha line center in Å.
pub const LYMAN_ALPHA_ANGSTROM: f64 = 1_215.67;

/// Intercept of the modified F10.7 index.
pub const F107MOD_INTERCEPT: f64 = -218.88;
/// Slope of the modified F10.7 index.
pub const F107MOD_SLOPE: f64 = 1.054_53e-9;

/// Regression terms in the chromospheric coefficient and regressor matrices.
pub const CHROMOSPHERIC_TERMS: usize = 2;
/// Regression terms in the coronal coefficient and regressor matrices.
pub const CORONAL_TERMS: usize = 3;

#[cfg(test)]
mod tests {
    use super::{
        EV_TO_ERG, F107MOD_INTERCEPT, F107MOD_SLOPE, HC_EV_ANGSTROM, LYMAN_ALPHA_ANGSTROM,
    };

    #[test]
    fn lyman_alpha_photon_energy_is_about_ten_ev() {
        let energy_ev = HC_EV_ANGSTROM / LYMAN_ALPHA_ANGSTROM;
        assert!((energy_ev - 10.2).abs() < 0.01);
        assert!((energy_ev * EV_TO_ERG - 1.634_258e-11).abs() < 1.0e-17);
    }

    #[test]
    fn f107mod_constants_remain_finite() {
        for value in [F107MOD_INTERCEPT, F107MOD_SLOPE] {
            assert!(value.is_finite());
        }
        assert!(F107MOD_SLOPE > 0.0);
    }
}
