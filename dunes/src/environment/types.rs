use dunes_core_contact_impl::{create::ContactCreateCommandServiceImpl, ContactFeatureServiceImpl};
use dunes_core_health_impl::HealthFeatureServiceImpl;
use dunes_persistence_memory::{contact::MemoryContactRepository, MemoryDatabase};
use dunes_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = dunes_api_rest::RestServer<HealthFeature, ContactFeature>;

// Persistence
pub type Database = MemoryDatabase;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Repositories
pub type ContactRepo = MemoryContactRepository;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database>;

pub type ContactFeature = ContactFeatureServiceImpl<Database, ContactCreate>;
pub type ContactCreate = ContactCreateCommandServiceImpl<Id, Time, ContactRepo>;
