#[allow(unused_imports)]
pub mod prelude {
    pub use super::artist::Entity as Artist;
    pub use super::show::Entity as Show;
    pub use super::venue::Entity as Venue;
}

pub mod artist;
pub mod genres;
pub mod show;
pub mod venue;

pub use genres::Genres;
