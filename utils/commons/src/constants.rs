/// Tag for the Custom Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Ownership Transferred event.
pub const OWNERSHIP_TRANSFERRED_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Internal Value Updated event.
pub const INTERNAL_VALUE_UPDATED_TAG: u8 = u8::MAX - 7;
