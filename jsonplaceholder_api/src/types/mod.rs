mod meta;
pub use self::meta::ApiResponse;

mod post;
pub use self::post::{CreatePost, Post, UpdatePost, UpdatedPost};

mod comment;
pub use self::comment::Comment;

mod album;
pub use self::album::Album;

mod photo;
pub use self::photo::Photo;

mod todo;
pub use self::todo::Todo;

mod user;
pub use self::user::{Address, Company, Geo, User};
