mod common;
pub use self::common::Query;

mod comment;
pub use self::comment::CommentQuery;

mod photo;
pub use self::photo::PhotoQuery;

mod todo;
pub use self::todo::TodoQuery;
