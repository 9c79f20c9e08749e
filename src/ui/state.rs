//! Observable UI state: four buttons and the amount input.

use std::fmt;

use serde::Serialize;

use crate::blockchain::units::is_positive_amount;

/// Connect button label before any connection attempt.
pub const CONNECT_LABEL: &str = "Connect";
/// Connect button label once a session is open.
pub const CONNECTED_LABEL: &str = "Disconnect";
/// Connect button label when no wallet provider exists.
pub const INSTALL_PROMPT: &str = "Please install MetaMask";

/// The four buttons, named after their element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Connect,
    Fund,
    Balance,
    Withdraw,
}

impl ButtonId {
    pub fn element_id(&self) -> &'static str {
        match self {
            ButtonId::Connect => "connectButton",
            ButtonId::Fund => "fundButton",
            ButtonId::Balance => "balanceButton",
            ButtonId::Withdraw => "withdrawButton",
        }
    }

    /// Name of the action the button triggers, used in logs and metrics.
    pub fn action(&self) -> &'static str {
        match self {
            ButtonId::Connect => "connect",
            ButtonId::Fund => "fund",
            ButtonId::Balance => "get_balance",
            ButtonId::Withdraw => "withdraw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub disabled: bool,
}

impl Button {
    fn new(label: &str, disabled: bool) -> Self {
        Self {
            label: label.to_string(),
            disabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
    #[serde(rename = "connectButton")]
    pub connect_button: Button,
    #[serde(rename = "fundButton")]
    pub fund_button: Button,
    #[serde(rename = "balanceButton")]
    pub balance_button: Button,
    #[serde(rename = "withdrawButton")]
    pub withdraw_button: Button,
    #[serde(rename = "ethAmount")]
    pub eth_amount: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            connect_button: Button::new(CONNECT_LABEL, false),
            fund_button: Button::new("Fund", true),
            balance_button: Button::new("Get Balance", true),
            withdraw_button: Button::new("Withdraw", true),
            eth_amount: String::new(),
        }
    }
}

impl UiState {
    pub fn button(&self, id: ButtonId) -> &Button {
        match id {
            ButtonId::Connect => &self.connect_button,
            ButtonId::Fund => &self.fund_button,
            ButtonId::Balance => &self.balance_button,
            ButtonId::Withdraw => &self.withdraw_button,
        }
    }

    pub(crate) fn show_connected(&mut self) {
        self.connect_button.label = CONNECTED_LABEL.to_string();
        self.set_session_buttons_disabled(false);
    }

    pub(crate) fn show_install_prompt(&mut self) {
        self.connect_button.label = INSTALL_PROMPT.to_string();
        self.set_session_buttons_disabled(true);
    }

    pub(crate) fn show_disconnected(&mut self) {
        self.connect_button.label = CONNECT_LABEL.to_string();
        self.set_session_buttons_disabled(true);
    }

    fn set_session_buttons_disabled(&mut self, disabled: bool) {
        self.balance_button.disabled = disabled;
        self.withdraw_button.disabled = disabled;
    }

    /// Store new input text and revalidate the fund button.
    pub(crate) fn set_amount(&mut self, value: String) {
        self.eth_amount = value;
        self.refresh_fund_button();
    }

    /// Enable the fund button only for a positive amount.
    pub(crate) fn refresh_fund_button(&mut self) {
        self.fund_button.disabled = !is_positive_amount(&self.eth_amount);
    }
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in [
            ButtonId::Connect,
            ButtonId::Fund,
            ButtonId::Balance,
            ButtonId::Withdraw,
        ] {
            let button = self.button(id);
            let marker = if button.disabled { "disabled" } else { "enabled" };
            writeln!(f, "[{}] {:<16} {}", marker, id.element_id(), button.label)?;
        }
        write!(f, "ethAmount = {:?}", self.eth_amount)
    }
}
