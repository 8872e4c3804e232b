use dunes_core_contact_contracts::create::MockContactCreateCommandService;
use dunes_persistence_contracts::{MockDatabase, MockTransaction};

use crate::ContactFeatureServiceImpl;

mod submit_message;

type Sut = ContactFeatureServiceImpl<MockDatabase, MockContactCreateCommandService<MockTransaction>>;
