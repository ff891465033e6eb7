use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// A digit run matched by one of the scanners does not fit in a marker
    /// or slot id. Ordinary map files never produce this.
    #[error("numeric field `{text}` is out of range")]
    FieldOutOfRange { text: String },
}
