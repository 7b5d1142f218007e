pub mod profile_tab;

pub use profile_tab::ProfileTab;
