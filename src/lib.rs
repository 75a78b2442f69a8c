pub mod helpers;
pub mod matrix;
mod error;
mod shift;
mod caesar;
mod substitution;
mod vigenere;
mod playfair;
mod railfence;
mod route;
mod columnar;
mod polybius;
mod pigpen;
mod hill;
pub mod dispatch;

pub use error::Error;
pub use error::Result;
pub use shift::ShiftCipher;
pub use caesar::CaesarCipher;
pub use substitution::SubstitutionCipher;
pub use vigenere::VigenereCipher;
pub use playfair::PlayfairCipher;
pub use railfence::RailFenceCipher;
pub use route::Route;
pub use route::RouteCipher;
pub use columnar::ColumnarTransposition;
pub use polybius::PolybiusCipher;
pub use pigpen::PigpenCipher;
pub use hill::HillCipher;
pub use dispatch::MethodInfo;

/// Uniform contract implemented by every cipher engine.
///
/// Engines are stateless value objects: the constructor consumes the typed
/// key, and `encrypt`/`decrypt` are pure functions of their input.
pub trait Cipher {
    fn encrypt(&self, plaintext: &str) -> Result<String>;
    fn decrypt(&self, ciphertext: &str) -> Result<String>;
}
