use sea_orm_migration::prelude::*;
use sha2::Digest as _;

use crate::m20260803_101112_init::{Employment, LaborRules, User};

const TENANT: u128 = 0xaa01;
const ADMIN: u128 = 0xad01;
const EMPLOYEE: u128 = 0xee01;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let time = Expr::val("2026-08-04T07:00:09.000Z").cast_as("timestamptz");
        let tenant = Expr::val(format!("{:032x}", TENANT)).cast_as("uuid");

        // Colombia statutory constants for 2026
        manager
            .exec_stmt(Query::insert()
                .into_table(LaborRules::Table)
                .columns([
                    "id", "created_at", "updated_at",
                    "country_code", "year", "valid_from", "active",
                    "minimum_wage", "transport_allowance", "transport_allowance_threshold",
                    "health_employee_pct", "pension_employee_pct", "solidarity_fund_pct",
                    "health_employer_pct", "pension_employer_pct", "parafiscal_pct",
                    "arl_level_1", "arl_level_2", "arl_level_3", "arl_level_4", "arl_level_5",
                    "overtime_day_multiplier", "overtime_night_multiplier",
                    "night_surcharge_multiplier", "sunday_holiday_multiplier",
                    "severance_rate", "severance_interest_rate", "vacation_rate", "bonus_rate",
                ])
                .values_panic([
                    Expr::val(format!("{:032x}", 0xca01 as u128)).cast_as("uuid"), time.clone(), time.clone(),
                    "CO".into(), 2026.into(), Expr::val("2026-01-01").cast_as("date"), true.into(),
                    1_300_000.0.into(), 162_000.0.into(), 2_600_000.0.into(),
                    0.04.into(), 0.04.into(), 0.01.into(),
                    0.085.into(), 0.12.into(), 0.09.into(),
                    0.00522.into(), 0.01044.into(), 0.02436.into(), 0.0435.into(), 0.0696.into(),
                    1.25.into(), 1.75.into(),
                    1.35.into(), 1.75.into(),
                    0.0833.into(), 0.01.into(), 0.0417.into(), 0.0833.into(),
                ])
                .to_owned()
        ).await.unwrap();

        // Tenant admin, logs in with admin:admin
        let hashed_password = &sha2::Sha256::digest("admin:admin")[..];

        manager
            .exec_stmt(Query::insert()
                .into_table(User::Table)
                .columns(["id", "created_at", "updated_at", "tenant_id", "username", "password", "role"])
                .values_panic([Expr::val(format!("{:032x}", ADMIN)).cast_as("uuid"), time.clone(), time.clone(), tenant.clone(), "admin".into(), hashed_password.into(), Expr::val("admin").cast_as("role_type")])
                .to_owned()
        ).await.unwrap();

        // One employee with a login of their own, password equals username
        let hashed_password = &sha2::Sha256::digest("maria:maria")[..];

        manager
            .exec_stmt(Query::insert()
                .into_table(User::Table)
                .columns(["id", "created_at", "updated_at", "tenant_id", "username", "password", "role"])
                .values_panic([Expr::val(format!("{:032x}", EMPLOYEE)).cast_as("uuid"), time.clone(), time.clone(), tenant.clone(), "maria".into(), hashed_password.into(), Expr::val("employee").cast_as("role_type")])
                .to_owned()
        ).await.unwrap();

        manager
            .exec_stmt(Query::insert()
                .into_table(Employment::Table)
                .columns(["id", "created_at", "updated_at", "tenant_id", "user_id", "display_name", "base_salary", "salary_period", "currency_code", "risk_level", "active"])
                .values_panic([
                    Expr::val(format!("{:032x}", EMPLOYEE + 0x100)).cast_as("uuid"), time.clone(), time.clone(),
                    tenant.clone(), Expr::val(format!("{:032x}", EMPLOYEE)).cast_as("uuid"),
                    "Maria Gomez".into(), 2_860_000.0.into(), Expr::val("monthly").cast_as("salary_period"),
                    "COP".into(), 1.into(), true.into(),
                ])
                .to_owned()
        ).await.unwrap();

        // Nine more employments without portal accounts
        for i in 1..=9 {
            let uuid = format!("{:032x}", EMPLOYEE + 0x100 + i as u128);
            let salary = rand::random_range(1_300_000..=8_000_000) as f64;
            let risk_level = rand::random_range(1..=3);

            manager
                .exec_stmt(Query::insert()
                    .into_table(Employment::Table)
                    .columns(["id", "created_at", "updated_at", "tenant_id", "display_name", "base_salary", "salary_period", "currency_code", "risk_level", "active"])
                    .values_panic([
                        Expr::val(uuid).cast_as("uuid"), time.clone(), time.clone(),
                        tenant.clone(), format!("Employee {}", i).into(),
                        salary.into(), Expr::val("monthly").cast_as("salary_period"),
                        "COP".into(), risk_level.into(), true.into(),
                    ])
                    .to_owned()
            ).await.unwrap();
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for i in 0..=9 {
            let uuid = format!("{:032x}", EMPLOYEE + 0x100 + i as u128);

            manager
                .exec_stmt(Query::delete()
                    .from_table(Employment::Table)
                    .and_where(Expr::col("id").eq(Expr::val(uuid).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();
        }

        for uuid in [format!("{:032x}", ADMIN), format!("{:032x}", EMPLOYEE)] {
            manager
                .exec_stmt(Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col("id").eq(Expr::val(uuid).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();
        }

        manager
            .exec_stmt(Query::delete()
                .from_table(LaborRules::Table)
                .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", 0xca01 as u128)).cast_as("uuid")))
                .to_owned()
        ).await.unwrap();

        Ok(())
    }
}
