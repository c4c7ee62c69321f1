pub mod dashboard_header;
pub mod login_modal;
pub mod qr_scanner;
pub mod video_library;

pub use dashboard_header::DashboardHeader;
pub use login_modal::LoginModal;
pub use qr_scanner::QrScanner;
pub use video_library::VideoLibrary;
