pub mod emit;
pub mod errors;
pub mod extract;
pub mod model;

pub use errors::ConvertError;
pub use model::{MapModel, MarkerRecord};

/// Convert FrogBot map definition source into the equivalent KTX bot
/// marker command script. Pure text transformation: no I/O, no shared
/// state, deterministic for a given input.
pub fn convert(source: &str) -> Result<String, ConvertError> {
    let model = extract::extract(source)?;
    Ok(emit::emit(&model))
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
