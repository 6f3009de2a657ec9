use crate::domain::models::expense::DomainExpense;
use shared::Expense as SharedExpense;

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_dto(domain: DomainExpense) -> SharedExpense {
        SharedExpense {
            id: domain.id,
            amount: domain.amount,
            description: domain.description,
            category: domain.category,
            date: domain.date,
        }
    }
}
