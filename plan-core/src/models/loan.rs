use crate::form::FormRecord;

/// Loan categories offered in the type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanType {
    Home,
    Auto,
    Student,
    Personal,
    CreditCard,
    Other,
}

impl LoanType {
    pub const ALL: [LoanType; 6] = [
        LoanType::Home,
        LoanType::Auto,
        LoanType::Student,
        LoanType::Personal,
        LoanType::CreditCard,
        LoanType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home Loan",
            Self::Auto => "Auto Loan",
            Self::Student => "Student Loan",
            Self::Personal => "Personal Loan",
            Self::CreditCard => "Credit Card",
            Self::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanField {
    LoanType,
    Amount,
    TenureMonths,
    Installment,
    InterestRate,
}

impl LoanField {
    pub const ALL: [LoanField; 5] = [
        LoanField::LoanType,
        LoanField::Amount,
        LoanField::TenureMonths,
        LoanField::Installment,
        LoanField::InterestRate,
    ];

    /// Column / wire key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::LoanType => "type",
            Self::Amount => "amount",
            Self::TenureMonths => "tenure_months",
            Self::Installment => "installment",
            Self::InterestRate => "interest_rate",
        }
    }
}

/// A loan row as edited in the form. Every key is always present, blank by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loan {
    /// Usually a [`LoanType`] label; blank until chosen.
    pub loan_type: String,
    /// Outstanding principal.
    pub amount: String,
    pub tenure_months: String,
    /// Periodic installment (EMI).
    pub installment: String,
    /// Annual interest rate, in percent.
    pub interest_rate: String,
}

impl FormRecord for Loan {
    type Field = LoanField;

    fn field(
        &self,
        field: LoanField,
    ) -> &str {
        match field {
            LoanField::LoanType => &self.loan_type,
            LoanField::Amount => &self.amount,
            LoanField::TenureMonths => &self.tenure_months,
            LoanField::Installment => &self.installment,
            LoanField::InterestRate => &self.interest_rate,
        }
    }

    fn set_field(
        &mut self,
        field: LoanField,
        value: String,
    ) {
        let slot = match field {
            LoanField::LoanType => &mut self.loan_type,
            LoanField::Amount => &mut self.amount,
            LoanField::TenureMonths => &mut self.tenure_months,
            LoanField::Installment => &mut self.installment,
            LoanField::InterestRate => &mut self.interest_rate,
        };
        *slot = value;
    }
}
