//! Model vocabulary - categorical encoding shared by the wizard and the pipeline.
//!
//! - `CategoricalField` - the four answers the model consumes
//! - `LabelEncoder` - one trained vocabulary
//! - `EncodingRegistry` - all vocabularies plus feature order and target labels
//! - `FeatureVector` - the encoded model input

mod errors;
mod feature_vector;
mod field;
mod label_encoder;
pub(crate) mod registry;

pub use errors::{EncoderDefinitionError, EncodingError, RegistryDefinitionError};
pub use feature_vector::FeatureVector;
pub use field::{CategoricalField, UnknownField};
pub use label_encoder::LabelEncoder;
pub use registry::EncodingRegistry;
