// tests/integration/kind_dispatch.rs
//! Kind selection, literal inference and native arithmetic across the public API

use std::str::FromStr;

use tabula::numerics::types::kind::ElementKind;
use tabula::{Matrix, NumericsError, Scalar, Vector};

#[test]
fn test_kind_parsed_from_configuration_text() {
    println!("=== Kind Parsing Test ===");

    let requested = ["int8", " Float32 ", "uint64"];
    let kinds: Vec<ElementKind> = requested
        .iter()
        .map(|name| ElementKind::from_str(name).unwrap())
        .collect();
    assert_eq!(kinds, [ElementKind::Int8, ElementKind::Float32, ElementKind::Uint64]);

    for kind in kinds {
        let v = Vector::zero(3, kind).unwrap();
        assert_eq!(v.kind(), kind);
        assert_eq!(v.get(2).unwrap(), kind.zero());
    }

    assert_eq!(
        ElementKind::from_str("complex128").unwrap_err(),
        NumericsError::InvalidKind("complex128".to_string())
    );
}

#[test]
fn test_literal_kind_follows_rust_type() {
    println!("=== Literal Inference Test ===");

    assert_eq!(Vector::filled([1_isize, 2, 3]).unwrap().kind(), ElementKind::Int);
    assert_eq!(Vector::filled([1_usize, 2, 3]).unwrap().kind(), ElementKind::Uint);
    assert_eq!(Vector::filled([1, 2, 3]).unwrap().kind(), ElementKind::Int32);
    assert_eq!(Vector::filled([1.0, 2.0]).unwrap().kind(), ElementKind::Float64);

    let mixed = Vector::filled([Scalar::Int8(1), Scalar::Int16(2)]).unwrap_err();
    assert_eq!(
        mixed,
        NumericsError::IrregularInput {
            position: 1,
            expected: ElementKind::Int8,
            found: ElementKind::Int16,
        }
    );
}

#[test]
fn test_set_chaining_and_typed_reads() {
    let mut v = Vector::zero(3, ElementKind::Uint16).unwrap();
    v.set(0, 7_u16).unwrap().set(2, 9_u16).unwrap();
    assert_eq!(v.to_vec::<u16>().unwrap(), vec![7, 0, 9]);
    assert_eq!(v.get_as::<u16>(2).unwrap(), 9);

    assert!(matches!(v.get_as::<i32>(0), Err(NumericsError::KindMismatch { .. })));
    assert!(matches!(v.set(1, 1_i32), Err(NumericsError::KindMismatch { .. })));
    assert_eq!(
        v.set(3, 1_u16).unwrap_err(),
        NumericsError::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn test_integer_arithmetic_wraps_consistently() {
    println!("=== Wrapping Arithmetic Test ===");

    let a = Vector::filled([i8::MAX, i8::MIN]).unwrap();
    let b = Vector::filled([1_i8, 1]).unwrap();
    assert_eq!(a.add(&b).unwrap().to_vec::<i8>().unwrap(), vec![i8::MIN, i8::MIN + 1]);
    assert_eq!(a.sub(&b).unwrap().to_vec::<i8>().unwrap(), vec![i8::MAX - 1, i8::MAX]);

    // MIN / -1 wraps instead of panicking
    let min = Vector::filled([i32::MIN]).unwrap();
    assert_eq!(min.divide_by_scalar(-1_i32).unwrap().to_vec::<i32>().unwrap(), vec![i32::MIN]);

    // the product accumulator wraps the same way
    let m = Matrix::filled([[200_u8, 100]]).unwrap();
    let v = Vector::filled([1_u8, 1]).unwrap();
    assert_eq!(m.multiply_vector(&v).unwrap().to_vec::<u8>().unwrap(), vec![44]);
}

#[test]
#[should_panic]
fn test_integer_division_by_zero_panics() {
    let v = Vector::filled([10_u32, 20]).unwrap();
    let _ = v.divide_by_scalar(0_u32);
}

#[test]
fn test_float_division_by_zero_follows_ieee() {
    let v = Vector::filled([1.0_f64, -1.0, 0.0]).unwrap();
    let cells = v.divide_by_scalar(0.0_f64).unwrap().to_vec::<f64>().unwrap();
    assert_eq!(cells[0], f64::INFINITY);
    assert_eq!(cells[1], f64::NEG_INFINITY);
    assert!(cells[2].is_nan());
}

#[test]
fn test_exact_equality_is_not_approximate() {
    let sum = Vector::filled([0.1_f64])
        .unwrap()
        .add(&Vector::filled([0.2_f64]).unwrap())
        .unwrap();
    let expected = Vector::filled([0.3_f64]).unwrap();

    assert!(!sum.equal(&expected).unwrap());
    assert!(sum.approx_eq(&expected, 1e-12).unwrap());

    let nan = Vector::filled([f32::NAN]).unwrap();
    assert!(!nan.equal(&nan).unwrap());
}

#[test]
fn test_matrices_survive_bincode() {
    let config = bincode::config::standard();
    for kind in ElementKind::ALL {
        let m = Matrix::random(2, 3, kind).unwrap();
        let encoded = bincode::serde::encode_to_vec(&m, config).unwrap();
        let (decoded, _len): (Matrix, usize) = bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(decoded.shape(), (2, 3));
        assert_eq!(decoded.kind(), kind);
        assert_eq!(decoded.cells(), m.cells());
    }
}
