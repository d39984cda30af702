pub mod acknowledgement;
pub mod options;
pub mod timing;

pub use acknowledgement::{
    MessageAcknowledgement, ProviderSmsMessageResponse, ScheduledMessageDetail,
    ScheduledSmsMessage, ScheduledSmsMessagesPage,
};
pub use options::{resolve_obfuscation, CallbackMode, Encoding, ObfuscateOption, Priority};
pub use timing::{resolve_timing, MessageTiming};
