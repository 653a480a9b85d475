use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use lambda_http::http::HeaderMap;
use thiserror::Error;

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature or timestamp header missing")]
    MissingHeaders,

    #[error("invalid request signature")]
    Invalid,
}

/// Verifies a Discord interaction signature.
///
/// Discord signs `timestamp || body` with the application's Ed25519 key and
/// sends the hex signature in `X-Signature-Ed25519`. Bad hex, wrong lengths
/// and a bad key all verify as `false`.
pub fn verify_key(body: &[u8], signature_hex: &str, timestamp: &str, public_key_hex: &str) -> bool {
    let Ok(key_bytes) = hex::decode(public_key_hex) else {
        return false;
    };
    let Ok(key_bytes) = <[u8; 32]>::try_from(key_bytes.as_slice()) else {
        return false;
    };
    let Ok(key) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };

    let Ok(sig_bytes) = hex::decode(signature_hex) else {
        return false;
    };
    let Ok(sig_bytes) = <[u8; 64]>::try_from(sig_bytes.as_slice()) else {
        return false;
    };
    let signature = Signature::from_bytes(&sig_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    key.verify(&message, &signature).is_ok()
}

/// Header presence is checked before any cryptography so the two failure
/// kinds stay distinguishable in logs.
pub fn verify_request(
    headers: &HeaderMap,
    body: &[u8],
    public_key_hex: &str,
) -> Result<(), SignatureError> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    let (Some(timestamp), Some(signature)) = (header(TIMESTAMP_HEADER), header(SIGNATURE_HEADER))
    else {
        return Err(SignatureError::MissingHeaders);
    };

    if verify_key(body, signature, timestamp, public_key_hex) {
        Ok(())
    } else {
        Err(SignatureError::Invalid)
    }
}
