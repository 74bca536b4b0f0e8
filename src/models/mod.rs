pub mod metadata;

pub use metadata::{
    LinkTags, MetaTags, MetadataRecord, OpenGraphTags, ParseMetadataRequest, TwitterTags,
};
