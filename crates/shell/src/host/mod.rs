use tracing::info;

use crate::input::ControllerHost;

mod gesture;

pub use gesture::{GestureGate, GestureGateClosed, GestureKind, GestureTrigger};

/// Wallet/account integration point. Hosts without a wallet leave the
/// default in place; every method is a documented no-op there.
pub trait WalletBridge {
    /// Identity of the signed-in user, if the host knows one.
    fn user(&self) -> Option<String>;

    /// Opaque account handle for the signed-in user.
    fn account(&self) -> Option<String>;

    /// Hosts without signing support ignore the transaction.
    fn sign_and_send(&self, transaction: &[u8]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullWallet;

impl WalletBridge for NullWallet {
    fn user(&self) -> Option<String> {
        None
    }

    fn account(&self) -> Option<String> {
        None
    }

    fn sign_and_send(&self, _transaction: &[u8]) {}
}

/// Every expected host integration, declared upfront as a named capability
/// with a no-op default. Resolved once at process start; nothing is
/// synthesized at call time.
pub struct HostCapabilities {
    pub wallet: Box<dyn WalletBridge>,
    pub controllers: Option<Box<dyn ControllerHost>>,
}

impl HostCapabilities {
    pub fn resolve(
        wallet: Option<Box<dyn WalletBridge>>,
        controllers: Option<Box<dyn ControllerHost>>,
    ) -> Self {
        info!(
            wallet = wallet.is_some(),
            controllers = controllers.is_some(),
            "host_capabilities_resolved"
        );
        Self {
            wallet: wallet.unwrap_or_else(|| Box::new(NullWallet)),
            controllers,
        }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            wallet: Box::new(NullWallet),
            controllers: None,
        }
    }
}
