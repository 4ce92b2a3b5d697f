pub mod common;
pub mod documentation;
pub mod stage;

pub use common::PrettyJson;
pub use documentation::{documentation, DocumentationResponse, EndpointDoc};
pub use stage::{
    create_stage, delete_stage, get_stage, list_stages, update_stage, DeleteStageResponse,
};
