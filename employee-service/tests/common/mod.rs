use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::JwtHandler;
use employee_service::domain::employee::errors::EmployeeStoreError;
use employee_service::domain::employee::models::Employee;
use employee_service::domain::employee::models::EmployeeId;
use employee_service::domain::employee::models::RecordId;
use employee_service::domain::employee::ports::EmployeeRepository;
use employee_service::domain::employee::service::AuthenticationService;
use employee_service::inbound::http::router::create_router;
use employee_service::outbound::credentials::Argon2PasswordHasher;
use employee_service::outbound::credentials::JwtTokenIssuer;
use secrecy::SecretString;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const EMPLOYEE_ID: &str = "AB123456";
pub const PASSWORD: &str = "Secur3!ty";

/// Employee store backed by a map, seeded at construction
pub struct InMemoryEmployeeRepository {
    employees: HashMap<String, Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|employee| (employee.employee_id.as_str().to_string(), employee))
                .collect(),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_employee_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeStoreError> {
        Ok(self.employees.get(employee_id.as_str()).cloned())
    }
}

/// Employee store that is always unreachable
pub struct UnavailableEmployeeRepository;

#[async_trait]
impl EmployeeRepository for UnavailableEmployeeRepository {
    async fn find_by_employee_id(
        &self,
        _employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeStoreError> {
        Err(EmployeeStoreError::DatabaseError(
            "error communicating with database: Connection refused (os error 111)".to_string(),
        ))
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub employee: Employee,
}

/// Argon2 cost low enough for debug-build tests
pub fn test_hasher() -> auth::PasswordHasher {
    auth::PasswordHasher::with_cost(1024, 1, 1).expect("Failed to build test hasher")
}

/// Seeded employee `AB123456` whose password is `Secur3!ty`
pub fn seeded_employee() -> Employee {
    Employee {
        id: RecordId::new(),
        employee_id: EmployeeId::new(EMPLOYEE_ID.to_string()).expect("Invalid employee ID"),
        password_hash: test_hasher()
            .hash(PASSWORD)
            .expect("Failed to hash password"),
    }
}

impl TestApp {
    /// Spawn the application backed by an in-memory store holding one employee
    pub async fn spawn() -> Self {
        let employee = seeded_employee();
        let repository = InMemoryEmployeeRepository::with_employees(vec![employee.clone()]);
        Self::spawn_with(repository, employee).await
    }

    /// Spawn the application with a store that fails every lookup
    pub async fn spawn_unavailable() -> Self {
        Self::spawn_with(UnavailableEmployeeRepository, seeded_employee()).await
    }

    async fn spawn_with<R: EmployeeRepository>(repository: R, employee: Employee) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let password_hasher = Argon2PasswordHasher::new(test_hasher())
            .expect("Failed to create password hasher");
        let token_issuer = JwtTokenIssuer::new(&SecretString::from(JWT_SECRET));

        let authentication_service = Arc::new(AuthenticationService::new(
            Arc::new(repository),
            Arc::new(password_hasher),
            Arc::new(token_issuer),
            Duration::from_secs(30),
        ));

        let router = create_router(authentication_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET.as_bytes()),
            employee,
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }
}
