use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

pub(crate) use clap::error::Error as ArgumentError;

#[derive(Debug)]
pub(crate) enum CommandError {
    LayerFileRead(PathBuf, String),
    LayerFileWrite(PathBuf, String),
    MalformedSourceFeature(String, usize, String),
    BoundaryLineEmpty(PathBuf),
    RegistryInvariantViolation(String),
    SourceNotFound {
        index: u16,
        name: String,
        code: String,
    },
    EmptyDissolve {
        index: u16,
        name: String,
    },
    ClipProducedNoGeometry {
        index: u16,
        name: String,
    },
    RingNotFound {
        index: u16,
        name: String,
    },
    GeometryEngineFailure {
        index: u16,
        detail: String,
    },
    MalformedCollection(String),
    MissingProperty(String, &'static str),
    CompletenessViolation(usize),
}

impl Error for CommandError {

}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LayerFileRead(path, a) => write!(f,"Error reading layer file '{}': {}",path.display(),a),
            Self::LayerFileWrite(path, a) => write!(f,"Error writing file '{}': {}",path.display(),a),
            Self::MalformedSourceFeature(layer, i, a) => write!(f,"While loading layer '{}', feature {} could not be read: {}",layer,i,a),
            Self::BoundaryLineEmpty(path) => write!(f,"Boundary file '{}' contained no line geometry",path.display()),
            Self::RegistryInvariantViolation(a) => write!(f,"Destination registry is invalid: {}",a),
            Self::SourceNotFound { index, name, code } => write!(f,"[{}] {}: no source feature found for code '{}'",index,name,code),
            Self::EmptyDissolve { index, name } => write!(f,"[{}] {}: selection dissolved to empty geometry",index,name),
            Self::ClipProducedNoGeometry { index, name } => write!(f,"[{}] {}: boundary clip produced no geometry for the requested side",index,name),
            Self::RingNotFound { index, name } => write!(f,"[{}] {}: no component polygon matched the extraction bounds",index,name),
            Self::GeometryEngineFailure { index, detail } => write!(f,"[{}] geometry engine failure: {}",index,detail),
            Self::MalformedCollection(a) => write!(f,"Feature collection could not be read: {}",a),
            Self::MissingProperty(name, prop) => write!(f,"Feature '{}' has no value for '{}'",name,prop),
            Self::CompletenessViolation(count) => write!(f,"Completeness validation failed with {} violation(s)",count),
        }
    }
}

#[derive(Debug)]
pub(crate) enum ProgramError {
    ArgumentError(ArgumentError),
    CommandError(CommandError)
}

impl Error for ProgramError {

}

impl Display for ProgramError {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArgumentError(a) => write!(f,"{}",a),
            Self::CommandError(a) => write!(f,"{}",a),
        }
    }
}

impl From<ArgumentError> for ProgramError {

    fn from(value: ArgumentError) -> Self {
        Self::ArgumentError(value)
    }
}

impl From<CommandError> for ProgramError {

    fn from(value: CommandError) -> Self {
        Self::CommandError(value)
    }
}
