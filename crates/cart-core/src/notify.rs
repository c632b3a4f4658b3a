//! User-facing notifications.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

/// Language of notification messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Brazilian Portuguese, the storefront's native language.
    #[serde(rename = "pt-BR")]
    PtBr,
}

/// Something the shopper must be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Requested quantity exceeds stock (or stock is unknown).
    OutOfStock,
    /// Adding a product failed unexpectedly.
    AddProductFailed,
    /// Removing a product failed unexpectedly.
    RemoveProductFailed,
    /// Updating a quantity failed unexpectedly.
    UpdateAmountFailed,
}

impl Notice {
    /// Localized message text.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Notice::OutOfStock, Locale::En) => "Requested quantity out of stock",
            (Notice::AddProductFailed, Locale::En) => "Error adding product",
            (Notice::RemoveProductFailed, Locale::En) => "Error removing product",
            (Notice::UpdateAmountFailed, Locale::En) => "Error updating product quantity",
            (Notice::OutOfStock, Locale::PtBr) => "Quantidade solicitada fora de estoque",
            (Notice::AddProductFailed, Locale::PtBr) => "Erro na adição do produto",
            (Notice::RemoveProductFailed, Locale::PtBr) => "Erro na remoção do produto",
            (Notice::UpdateAmountFailed, Locale::PtBr) => {
                "Erro na alteração de quantidade do produto"
            }
        }
    }
}

/// Fire-and-forget channel for user-facing warnings.
///
/// Implementations must not block and must not fail; a message that cannot
/// be delivered is dropped.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Notifier that reports through `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "cart::notice", "{}", message);
    }
}

/// Notifier that forwards messages to an unbounded channel.
///
/// The receiving side (a UI loop, a CLI printer) drains messages at its own
/// pace. Sends after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver its messages arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str) {
        let _ = self.tx.send(message.to_string());
    }
}
