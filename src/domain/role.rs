use std::fmt;

/// The parties that can register with the supply-chain contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Supplier,
    Transporter,
    Retailer,
}

/// Contract-level encoding of a [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCode(pub u8);

/// Where the user lands once a registration is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    Transporter,
    Dashboard,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Supplier, Role::Transporter, Role::Retailer];

    /// Looks up a role by its form label. Labels are matched exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Supplier" => Some(Self::Supplier),
            "Transporter" => Some(Self::Transporter),
            "Retailer" => Some(Self::Retailer),
            _ => None,
        }
    }

    /// The label used for this role in forms and batch files.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Transporter => "Transporter",
            Self::Retailer => "Retailer",
        }
    }

    /// The value the contract expects for this role.
    pub fn code(&self) -> RoleCode {
        match self {
            Self::Supplier => RoleCode(1),
            Self::Transporter => RoleCode(2),
            Self::Retailer => RoleCode(3),
        }
    }

    /// Where a newly registered party is sent.
    pub fn landing(&self) -> NavigationTarget {
        match self {
            Self::Transporter => NavigationTarget::Transporter,
            Self::Supplier | Self::Retailer => NavigationTarget::Dashboard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
