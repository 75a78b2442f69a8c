//! Uniform dispatch over the eleven cipher engines.
//!
//! Keys arrive as untyped optional strings (typically from an HTTP boundary).
//! This module owns all key parsing: each method id belongs to one of three
//! key categories — integer (`caesar`, `shift`, `rail_fence`), JSON matrix
//! (`hill`), or string (everything else) — and the parsed, validated key is
//! narrowed into the engine's typed constructor. Per-method optional-key
//! policy lives here too: `caesar` defaults to a shift of 3, `polybius` falls
//! back to the standard grid, and `pigpen` ignores its key entirely.
//!
//! Engine and key failures are wrapped with the operation and method name, so
//! callers see `"encryption failed with hill: …"` style messages.
//!
//! # Examples
//!
//! ```
//! use classic_crypto_rs::dispatch;
//!
//! let ct = dispatch::encrypt("HELLO", "caesar", None).unwrap();
//! assert_eq!(ct, "KHOOR");
//! assert_eq!(dispatch::decrypt(&ct, "caesar", None).unwrap(), "HELLO");
//! ```
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::{
    CaesarCipher, Cipher, ColumnarTransposition, HillCipher, PigpenCipher, PlayfairCipher,
    PolybiusCipher, RailFenceCipher, Route, RouteCipher, ShiftCipher, SubstitutionCipher,
    VigenereCipher,
};

/// One entry of the method catalog.
#[derive(Debug, Clone, Serialize)]
pub struct MethodInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub requires_key: bool,
    pub hint: &'static str,
}

const METHODS: [MethodInfo; 11] = [
    MethodInfo {
        id: "vigenere",
        label: "Vigenère Cipher",
        requires_key: true,
        hint: "alphabetic key",
    },
    MethodInfo {
        id: "caesar",
        label: "Caesar Cipher",
        requires_key: false,
        hint: "integer shift, default 3",
    },
    MethodInfo {
        id: "shift",
        label: "Shift Cipher",
        requires_key: true,
        hint: "integer shift 0\u{2013}25",
    },
    MethodInfo {
        id: "playfair",
        label: "Playfair Cipher",
        requires_key: true,
        hint: "alphabetic key",
    },
    MethodInfo {
        id: "hill",
        label: "Hill Cipher",
        requires_key: true,
        hint: "JSON matrix",
    },
    MethodInfo {
        id: "rail_fence",
        label: "Rail Fence Cipher",
        requires_key: true,
        hint: "integer \u{2265} 2",
    },
    MethodInfo {
        id: "columnar_transposition",
        label: "Columnar Transposition",
        requires_key: true,
        hint: "alphabetic key",
    },
    MethodInfo {
        id: "substitution",
        label: "Substitution Cipher",
        requires_key: true,
        hint: "26-letter permutation",
    },
    MethodInfo {
        id: "polybius",
        label: "Polybius Square",
        requires_key: false,
        hint: "alphabetic key (optional)",
    },
    MethodInfo {
        id: "route",
        label: "Route Cipher",
        requires_key: true,
        hint: "\"rows,cols,route\"",
    },
    MethodInfo {
        id: "pigpen",
        label: "Pigpen Cipher",
        requires_key: false,
        hint: "not used",
    },
];

/// The catalog of supported methods, fixed at compile time.
pub fn methods() -> &'static [MethodInfo] {
    &METHODS
}

#[derive(Clone, Copy)]
enum Op {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Encrypt => write!(f, "encryption"),
            Op::Decrypt => write!(f, "decryption"),
        }
    }
}

/// Encrypts `text` with the named method, parsing `key` per its category.
pub fn encrypt(text: &str, method: &str, key: Option<&str>) -> Result<String> {
    dispatch(text, method, key, Op::Encrypt)
}

/// Decrypts `text` with the named method, parsing `key` per its category.
pub fn decrypt(text: &str, method: &str, key: Option<&str>) -> Result<String> {
    dispatch(text, method, key, Op::Decrypt)
}

fn dispatch(text: &str, method: &str, key: Option<&str>, op: Op) -> Result<String> {
    if !METHODS.iter().any(|m| m.id == method) {
        let supported: Vec<&str> = METHODS.iter().map(|m| m.id).collect();
        return Err(Error::invalid(format!(
            "unsupported {op} method: {method}. supported methods: {}",
            supported.join(", ")
        )));
    }

    build(method, key)
        .and_then(|cipher| match op {
            Op::Encrypt => cipher.encrypt(text),
            Op::Decrypt => cipher.decrypt(text),
        })
        .map_err(|e| e.with_context(&op.to_string(), method))
}

/// Constructs the engine for a known method from its untyped key.
fn build(method: &str, key: Option<&str>) -> Result<Box<dyn Cipher>> {
    match method {
        "vigenere" => Ok(Box::new(VigenereCipher::new(require_key(key)?)?)),
        "caesar" => {
            let shift = optional_key(key).map(parse_int).transpose()?;
            Ok(Box::new(CaesarCipher::new(shift)))
        }
        "shift" => Ok(Box::new(ShiftCipher::new(parse_int(require_key(key)?)?))),
        "playfair" => Ok(Box::new(PlayfairCipher::new(require_key(key)?))),
        "hill" => Ok(Box::new(HillCipher::new(&parse_matrix(require_key(key)?)?)?)),
        "rail_fence" => Ok(Box::new(RailFenceCipher::new(parse_int(require_key(
            key,
        )?)?)?)),
        "columnar_transposition" => {
            Ok(Box::new(ColumnarTransposition::new(require_key(key)?)?))
        }
        "substitution" => Ok(Box::new(SubstitutionCipher::new(require_key(key)?)?)),
        "polybius" => Ok(Box::new(PolybiusCipher::new(optional_key(key)))),
        "route" => {
            let (rows, cols, route) = parse_route_key(require_key(key)?)?;
            Ok(Box::new(RouteCipher::new(rows, cols, route)?))
        }
        "pigpen" => Ok(Box::new(PigpenCipher::new())),
        other => Err(Error::Internal(format!("no engine registered for {other}"))),
    }
}

fn require_key(key: Option<&str>) -> Result<&str> {
    match key {
        Some(raw) if !raw.trim().is_empty() => Ok(raw),
        _ => Err(Error::invalid("a key is required")),
    }
}

fn optional_key(key: Option<&str>) -> Option<&str> {
    key.filter(|raw| !raw.trim().is_empty())
}

fn parse_int(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::invalid(format!("key must be an integer, got: {raw}")))
}

fn parse_matrix(raw: &str) -> Result<Vec<Vec<i64>>> {
    serde_json::from_str(raw)
        .map_err(|e| Error::invalid(format!("key must be a valid JSON matrix: {e}")))
}

/// Splits a composite `"rows,cols,route"` key into its typed parts.
fn parse_route_key(raw: &str) -> Result<(usize, usize, Route)> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(Error::invalid(format!(
            "key must be \"rows,cols,route\", got: {raw}"
        )));
    }
    let rows = parts[0]
        .parse()
        .map_err(|_| Error::invalid(format!("invalid row count: {}", parts[0])))?;
    let cols = parts[1]
        .parse()
        .map_err(|_| Error::invalid(format!("invalid column count: {}", parts[1])))?;
    let route = parts[2].parse()?;
    Ok((rows, cols, route))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_catalog() {
        let catalog = methods();
        assert_eq!(catalog.len(), 11);
        let keyless: Vec<&str> = catalog
            .iter()
            .filter(|m| !m.requires_key)
            .map(|m| m.id)
            .collect();
        assert_eq!(keyless, vec!["caesar", "polybius", "pigpen"]);
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_value(methods()).unwrap();
        assert_eq!(json[0]["id"], "vigenere");
        assert_eq!(json[0]["label"], "Vigenère Cipher");
        assert_eq!(json[0]["requires_key"], true);
        assert_eq!(json[0]["hint"], "alphabetic key");
    }

    #[test]
    fn test_caesar_default_key() {
        assert_eq!(encrypt("HELLO", "caesar", None).unwrap(), "KHOOR");
        assert_eq!(decrypt("KHOOR", "caesar", None).unwrap(), "HELLO");
        assert_eq!(encrypt("HELLO", "caesar", Some("")).unwrap(), "KHOOR");
    }

    #[rstest]
    #[case("vigenere", Some("LEMON"), "ATTACKATDAWN", "LXFOPVEFRNHR")]
    #[case("shift", Some("5"), "ATTACK", "FYYFHP")]
    #[case("rail_fence", Some("3"), "WEAREDISCOVEREDFLEEATONCE", "WECRLTEERDSOEEFEAOCAIVDEN")]
    #[case("polybius", None, "HELLO", "2315313134")]
    #[case("hill", Some("[[3,3],[2,5]]"), "HELP", "HIAT")]
    #[case("route", Some("3,4,spiral_cw"), "Hello, World!", "HELLRXXDLOWO")]
    #[case("substitution", Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), "Attack at dawn", "ATTACKATDAWN")]
    fn test_dispatch_encrypt(
        #[case] method: &str,
        #[case] key: Option<&str>,
        #[case] pt: &str,
        #[case] ct: &str,
    ) {
        assert_eq!(encrypt(pt, method, key).unwrap(), ct);
    }

    #[rstest]
    #[case("vigenere", Some("LEMON"), "LXFOPVEFRNHR", "ATTACKATDAWN")]
    #[case("rail_fence", Some("3"), "WECRLTEERDSOEEFEAOCAIVDEN", "WEAREDISCOVEREDFLEEATONCE")]
    #[case("polybius", None, "2315313134", "HELLO")]
    #[case("hill", Some("[[3,3],[2,5]]"), "HIAT", "HELP")]
    #[case("route", Some("3,4,spiral_cw"), "HELLRXXDLOWO", "HELLOWORLD")]
    fn test_dispatch_decrypt(
        #[case] method: &str,
        #[case] key: Option<&str>,
        #[case] ct: &str,
        #[case] pt: &str,
    ) {
        assert_eq!(decrypt(ct, method, key).unwrap(), pt);
    }

    #[rstest]
    #[case("playfair", Some("MONARCHY"))]
    #[case("columnar_transposition", Some("ZEBRAS"))]
    #[case("pigpen", None)]
    #[case("polybius", Some("SECRET"))]
    #[case("route", Some("4, 5, spiral_ccw"))]
    fn test_dispatch_round_trip(#[case] method: &str, #[case] key: Option<&str>) {
        let ct = encrypt("WEAREDISCOVERED", method, key).unwrap();
        assert_eq!(decrypt(&ct, method, key).unwrap(), "WEAREDISCOVERED");
    }

    #[test]
    fn test_unknown_method() {
        let err = encrypt("HELLO", "rot13", None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unsupported encryption method: rot13"));
        assert!(msg.contains("vigenere"));
    }

    #[rstest]
    #[case("vigenere")]
    #[case("shift")]
    #[case("playfair")]
    #[case("hill")]
    #[case("rail_fence")]
    #[case("columnar_transposition")]
    #[case("substitution")]
    #[case("route")]
    fn test_missing_required_key(#[case] method: &str) {
        assert!(encrypt("HELLO", method, None).is_err());
        assert!(encrypt("HELLO", method, Some("")).is_err());
    }

    #[rstest]
    #[case("shift", Some("three"))]
    #[case("rail_fence", Some("1"))]
    #[case("hill", Some("[[3,3],[2,5]"))]
    #[case("hill", Some("[[1,2,3],[4,5,6]]"))]
    #[case("route", Some("3,4"))]
    #[case("route", Some("3,4,diagonal"))]
    #[case("substitution", Some("ABC"))]
    fn test_invalid_keys(#[case] method: &str, #[case] key: Option<&str>) {
        assert!(encrypt("HELLO", method, key).is_err());
    }

    #[test]
    fn test_errors_carry_method_context() {
        let err = encrypt("HELLO", "shift", Some("three")).unwrap_err();
        assert!(err.to_string().starts_with("encryption failed with shift:"));

        let err = decrypt("HIA", "hill", Some("[[3,3],[2,5]]")).unwrap_err();
        assert!(err.to_string().starts_with("decryption failed with hill:"));
    }

    #[test]
    fn test_pigpen_ignores_key() {
        let a = encrypt("HELLO", "pigpen", None).unwrap();
        let b = encrypt("HELLO", "pigpen", Some("whatever")).unwrap();
        assert_eq!(a, b);
    }
}
