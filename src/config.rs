// Configuration
// Key files on disk and the runtime choices of the demo binary

use std::path::{Path, PathBuf};

use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::error::{RsaError, RsaResult};
use crate::rsa::bigint::from_u64;
use crate::rsa::{self, KeyMaterial, RsaBigInt};
use crate::util::file_ops::{read_to_string, write_file};

/// Key material as stored in a JSON key file. Numbers are decimal strings so
/// that keys of any size stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConfig {
    pub n: String,
    pub e: String,
    pub d: String,
}

impl KeyConfig {
    pub fn from_key_material(key: &KeyMaterial) -> Self {
        Self {
            n: key.n().to_string(),
            e: key.e().to_string(),
            d: key.d().to_string(),
        }
    }

    pub fn into_key_material(self) -> RsaResult<KeyMaterial> {
        let n = parse_field("n", &self.n)?;
        let e = parse_field("e", &self.e)?;
        let d = parse_field("d", &self.d)?;
        let key = KeyMaterial::new(n, e, d)?;

        // 'A', or N - 1 for moduli too small to carry it
        let sample = key.max_symbol().min(from_u64(65));
        if !key.verify(&sample)? {
            return Err(RsaError::InvalidKey("e and d are not inverse".to_string()));
        }
        Ok(key)
    }

    pub fn from_json(json: &str) -> RsaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> RsaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a key file
    pub fn load(path: &Path) -> RsaResult<Self> {
        let json = read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write a key file
    pub fn save(&self, path: &Path) -> RsaResult<()> {
        write_file(path, self.to_json()?.as_bytes())
    }
}

fn parse_field(name: &str, value: &str) -> RsaResult<RsaBigInt> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RsaError::InvalidKey(format!("`{}` is not a decimal number", name)));
    }
    RsaBigInt::from_str_radix(value, 10)
        .map_err(|_| RsaError::InvalidKey(format!("`{}` is not a decimal number", name)))
}

/// Where the demo takes its key material from
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum KeySource {
    #[default]
    Classroom,
    File(PathBuf),
}

/// How ciphertext is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Decimal,
    Hex,
}

/// Configuration for one demo run
#[derive(Clone, Debug, Default)]
pub struct DemoConfig {
    pub key: KeySource,
    pub parallel: bool,
    pub output: OutputFormat,
}

impl DemoConfig {
    pub fn with_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.key = KeySource::File(path.into());
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Resolve the configured key source
    pub fn key_material(&self) -> RsaResult<KeyMaterial> {
        match &self.key {
            KeySource::Classroom => Ok(KeyMaterial::classroom()),
            KeySource::File(path) => {
                log::info!("loading key file {}", path.display());
                KeyConfig::load(path)?.into_key_material()
            }
        }
    }

    /// Encrypt `plaintext` one byte per symbol and render the ciphertext in
    /// the configured output format.
    pub fn encrypt_to_text(&self, plaintext: &[u8], key: &KeyMaterial) -> RsaResult<String> {
        let ciphertext = self.encrypt(plaintext, key)?;
        Ok(match self.output {
            OutputFormat::Decimal => rsa::format_ciphertext(&ciphertext),
            OutputFormat::Hex => rsa::to_hex(&ciphertext),
        })
    }

    /// Parse ciphertext text in the configured output format and decrypt it
    /// back to bytes.
    pub fn decrypt_text(&self, text: &str, key: &KeyMaterial) -> RsaResult<Vec<u8>> {
        let ciphertext = match self.output {
            OutputFormat::Decimal => rsa::parse_ciphertext(text)?,
            OutputFormat::Hex => rsa::from_hex(text)?,
        };
        self.decrypt(&ciphertext, key)
    }

    fn encrypt(&self, plaintext: &[u8], key: &KeyMaterial) -> RsaResult<Vec<RsaBigInt>> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            let symbols: Vec<RsaBigInt> = plaintext.iter().map(|&b| RsaBigInt::from(b)).collect();
            return rsa::encrypt_symbols_par(&symbols, &key.public_key());
        }
        #[cfg(not(feature = "parallel"))]
        if self.parallel {
            log::warn!("built without the `parallel` feature, running sequentially");
        }

        rsa::encrypt_bytes(plaintext, &key.public_key())
    }

    fn decrypt(&self, ciphertext: &[RsaBigInt], key: &KeyMaterial) -> RsaResult<Vec<u8>> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            let symbols = rsa::decrypt_symbols_par(ciphertext, &key.private_key())?;
            return rsa::symbols_to_bytes(&symbols);
        }

        rsa::decrypt_to_bytes(ciphertext, &key.private_key())
    }
}
