use commons::{
    OwnershipTransferred, INTERNAL_VALUE_UPDATED_TAG, OWNERSHIP_TRANSFERRED_TAG, WITHDRAW_TAG,
};
use concordium_std::*;

use crate::external::{UpdateInternalValueParams, WithdrawParams};

/// Tagged Custom event to be serialized for the event log.
/// Minting and burning log the standard CIS2 events instead.
#[derive(Debug)]
pub enum ProbeNodeEvent<'e> {
    /// Minting fees paid out by the owner
    Withdraw(&'e WithdrawParams),
    /// Contract owner changed or ownership was renounced
    OwnershipTransferred(&'e OwnershipTransferred),
    /// Minting fee or metadata URI changed
    InternalValueUpdated(&'e UpdateInternalValueParams),
}

impl<'e> Serial for ProbeNodeEvent<'e> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            ProbeNodeEvent::Withdraw(params) => {
                out.write_u8(WITHDRAW_TAG)?;
                params.serial(out)
            }
            ProbeNodeEvent::OwnershipTransferred(transfer) => {
                out.write_u8(OWNERSHIP_TRANSFERRED_TAG)?;
                transfer.serial(out)
            }
            ProbeNodeEvent::InternalValueUpdated(update) => {
                out.write_u8(INTERNAL_VALUE_UPDATED_TAG)?;
                update.serial(out)
            }
        }
    }
}
