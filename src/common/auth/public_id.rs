use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};

pub const PUBLIC_ID_LENGTH: usize = 30;

/// Opaque client-facing id for users and addresses, drawn from [A-Za-z0-9].
pub fn generate_public_id() -> String {
    generate(PUBLIC_ID_LENGTH)
}

pub fn generate(length: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
