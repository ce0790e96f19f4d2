pub mod definition;
pub mod model;
pub mod validate;
pub mod wizard;

pub use definition::DefinitionError;
pub use model::{Feed, FeedTable, Field, TableSchema};
pub use validate::{
    AlwaysCompleteValidator, BoxedStepValidator, GeneralInfoValidator, SourceSampleValidator,
    StepValidator,
};
pub use wizard::Wizard;
pub use wizard::flow::Flow;
pub use wizard::step::{Step, StepId};
