use crate::form::FormRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalField {
    Name,
    TargetAmount,
    MonthsToAchieve,
    CurrentSavings,
    Sip,
    Priority,
}

impl GoalField {
    pub const ALL: [GoalField; 6] = [
        GoalField::Name,
        GoalField::TargetAmount,
        GoalField::MonthsToAchieve,
        GoalField::CurrentSavings,
        GoalField::Sip,
        GoalField::Priority,
    ];

    /// Column / wire key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::TargetAmount => "target_amount",
            Self::MonthsToAchieve => "months_to_achieve",
            Self::CurrentSavings => "current_savings",
            Self::Sip => "sip",
            Self::Priority => "priority",
        }
    }
}

/// A savings goal as edited in the form. Every key is always present, blank by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub target_amount: String,
    pub months_to_achieve: String,
    pub current_savings: String,
    /// Monthly systematic investment (SIP) toward this goal.
    pub sip: String,
    /// Free-form priority label, e.g. `"high"`.
    pub priority: String,
}

impl FormRecord for Goal {
    type Field = GoalField;

    fn field(
        &self,
        field: GoalField,
    ) -> &str {
        match field {
            GoalField::Name => &self.name,
            GoalField::TargetAmount => &self.target_amount,
            GoalField::MonthsToAchieve => &self.months_to_achieve,
            GoalField::CurrentSavings => &self.current_savings,
            GoalField::Sip => &self.sip,
            GoalField::Priority => &self.priority,
        }
    }

    fn set_field(
        &mut self,
        field: GoalField,
        value: String,
    ) {
        let slot = match field {
            GoalField::Name => &mut self.name,
            GoalField::TargetAmount => &mut self.target_amount,
            GoalField::MonthsToAchieve => &mut self.months_to_achieve,
            GoalField::CurrentSavings => &mut self.current_savings,
            GoalField::Sip => &mut self.sip,
            GoalField::Priority => &mut self.priority,
        };
        *slot = value;
    }
}
