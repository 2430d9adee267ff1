use euv_core::coefficients::{CoefficientColumns, CoefficientStore, CoefficientTable};
use euv_core::domain::{ModelVariant, TableId};
use euv_core::models::{Euv91, SpectralModel, SpectralOutput, build_model};
use euv_core::numerics::project;
use euv_core::proxy::ProxyInput;
use std::path::Path;

fn fixture_model() -> Euv91 {
    let store =
        CoefficientStore::open(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/coefficients"));
    Euv91::new(&store).expect("fixture tables should build a model")
}

fn single_bin_columns() -> CoefficientColumns {
    CoefficientColumns {
        description: None,
        bins: None,
        a1: vec![1.0],
        b1: vec![2.0],
        wchr: vec![3.0],
        a2: vec![0.0],
        b2: vec![0.0],
        w1: vec![0.0],
        w2: vec![0.0],
    }
}

#[test]
fn known_coefficients_round_trip_through_build_e() {
    let store = CoefficientStore::from_tables([
        CoefficientTable::from_columns(TableId::bands(ModelVariant::Euv91), single_bin_columns())
            .expect("bands should be valid"),
        CoefficientTable::from_columns(TableId::lines(ModelVariant::Euv91), single_bin_columns())
            .expect("lines should be valid"),
    ]);
    let model = Euv91::new(&store).expect("model should build");

    let e = Euv91::build_e(10.0).expect("scalar should be accepted");
    assert_eq!([e[(0, 0)], e[(0, 1)]], [1.0, 10.0]);

    let chromo = model.bands().matrices().chromospheric();
    assert_eq!([chromo[(0, 0)], chromo[(0, 1)]], [1.0, 6.0]);

    let projected = project(chromo, &e);
    assert_eq!((projected.nrows(), projected.ncols()), (1, 1));
    assert_eq!(projected[(0, 0)], 61.0);
}

#[test]
fn spectral_calls_signal_not_implemented_for_any_input() {
    let model = fixture_model();
    let inputs = [
        ProxyInput::new(150.0, 4.0e11),
        ProxyInput::new([70.0, 80.0], [3.0e11, 3.1e11]),
        ProxyInput::new([1.0, 2.0, 3.0], [1.0, 2.0]),
        ProxyInput::new(150.0, vec![4.0e11]),
    ];

    for input in &inputs {
        let bands = model.spectral_bands(input).expect("stub should not fail");
        let lines = model.spectral_lines(input).expect("stub should not fail");
        assert_eq!(bands, SpectralOutput::NotImplemented(ModelVariant::Euv91));
        assert!(!lines.is_implemented());

        let (bands, lines) = model.spectra(input).expect("stub should not fail");
        assert!(bands.computed().is_none());
        assert!(lines.computed().is_none());
    }
}

#[test]
fn not_implemented_converts_to_computation_error_on_request() {
    let model = fixture_model();
    let error = model
        .spectral_bands(&ProxyInput::new(150.0, 4.0e11))
        .expect("stub should not fail")
        .into_result()
        .expect_err("no spectrum is available");

    assert_eq!(error.placeholder(), "RUN.NOT_IMPLEMENTED");
    assert_eq!(error.exit_code(), 4);
}

#[test]
fn construction_builds_both_matrix_pairs() {
    let model = fixture_model();

    assert_eq!(model.bands().bin_count(), 3);
    assert_eq!(model.lines().bin_count(), 2);
    let coronal = model.bands().matrices().coronal();
    assert_eq!((coronal.nrows(), coronal.ncols()), (3, 3));
    assert!((coronal[(2, 1)] - 0.01).abs() < 1.0e-15);
}

#[test]
fn model_factory_selects_the_variant() {
    let store =
        CoefficientStore::open(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/coefficients"));

    let legacy = build_model(ModelVariant::Euv91, &store).expect("euv91 should build");
    let current = build_model(ModelVariant::Serf2, &store).expect("serf2 should build");
    assert_eq!(legacy.variant(), ModelVariant::Euv91);
    assert_eq!(current.variant(), ModelVariant::Serf2);
    assert_eq!(store.cached_table_count(), 4);

    let input = ProxyInput::new(150.0, 4.0e11);
    assert!(!legacy.spectral_bands(&input).expect("stub").is_implemented());
    assert!(current.spectral_bands(&input).expect("valid").is_implemented());
}
