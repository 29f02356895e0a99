use serde::{Deserialize, Serialize};

/// Number of questions in the fixed questionnaire.
pub const QUESTION_COUNT: u32 = 10;

/// A registered distributor.
///
/// Created once per registration and immutable thereafter. The `id` is
/// generated by the store on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: i64,
    pub distributor_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A single survey answer tied to one distributor and one question number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorAnswer {
    pub id: i64,
    pub distributor_id: i64,
    /// Question number in `1..=QUESTION_COUNT`.
    pub question_number: u32,
    /// Free-text answer; `None` when the question was left blank.
    pub answer: Option<String>,
}

/// Payload for registering a new distributor, before an id exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewDistributor {
    pub distributor_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Distributor {
    /// Attaches a store-generated id to a registration payload.
    pub fn from_new(id: i64, new: NewDistributor) -> Self {
        Self {
            id,
            distributor_name: new.distributor_name,
            contact_person: new.contact_person,
            email: new.email,
            phone: new.phone,
            address: new.address,
        }
    }
}
