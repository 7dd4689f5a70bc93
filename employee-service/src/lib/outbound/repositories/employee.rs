use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::RecordId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::employee::errors::EmployeeStoreError;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Uuid,
    employee_id: String,
    password_hash: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeStoreError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let employee_id =
            EmployeeId::new(row.employee_id).map_err(|e| EmployeeStoreError::CorruptRecord {
                record_id: row.id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Employee {
            id: RecordId(row.id),
            employee_id,
            password_hash: row.password_hash,
        })
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_employee_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeStoreError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, employee_id, password_hash
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeStoreError::DatabaseError(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }
}
