pub mod clock;
pub mod controller;
pub mod state;
pub mod timer;
pub mod timing;
pub mod token;
pub mod tokenizer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{PlaybackController, Snapshot};
pub use state::{PlaybackState, ReadingState, TickOutcome};
pub use timer::RepeatingTimer;
pub use timing::tick_interval;
pub use token::Token;
pub use tokenizer::tokenize;
