mod lists;
mod paginate;
mod publications;

pub use lists::{
    media_title, talk_desc, talk_title, talk_type, talk_year, ListSection, ListSections,
};
pub use paginate::{displayed, Paginated};
pub use publications::{PubFilter, PublicationView, SortOrder, PUBLICATION_LIMIT};
