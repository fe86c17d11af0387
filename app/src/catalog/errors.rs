#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("cannot display an empty testimonial collection")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, Error>;
