pub mod employee;

pub use employee::PostgresEmployeeRepository;
