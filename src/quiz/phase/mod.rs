mod done;
mod feedback;
mod question;

pub use self::done::*;
pub use self::feedback::*;
pub use self::question::*;
