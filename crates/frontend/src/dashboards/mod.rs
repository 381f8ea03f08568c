pub mod d400_home;

pub use d400_home::HomeDashboard;
