mod admin_settings;
mod album_edit;
mod albums;
mod edit_fields;
mod queue;
mod song_edit;
mod songs;

pub use admin_settings::SettingsView;
pub use album_edit::AlbumEditView;
pub use albums::AlbumsView;
pub use queue::QueueView;
pub use song_edit::SongEditView;
pub use songs::SongsView;
