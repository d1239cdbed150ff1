//! Tool definitions module.
//!
//! One file per tool. Each tool defines its parameters, its output shape,
//! the upstream query it issues and the projection from the Confluence
//! response.

pub mod common;
pub mod page;
pub mod search;
pub mod space_content;
pub mod spaces;

pub use page::{GetPageParams, GetPageTool, PageOutput};
pub use search::{SearchConfluenceParams, SearchConfluenceTool, SearchHit, SearchOutput};
pub use space_content::{
    GetSpaceContentParams, GetSpaceContentTool, SpaceContentItem, SpaceContentOutput,
};
pub use spaces::{ListSpacesParams, ListSpacesTool, SpaceInfo, SpacesOutput};
