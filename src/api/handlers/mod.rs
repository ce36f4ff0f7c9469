pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod protected;
pub use self::protected::protected;

pub mod register;
pub use self::register::register;

pub mod types;
