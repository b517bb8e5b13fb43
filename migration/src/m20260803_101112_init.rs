use sea_orm_migration::{prelude::{extension::postgres::TypeDropStatement, *}, sea_orm::{ActiveEnum, DbBackend, DeriveActiveEnum, EnumIter, Schema}};

use crate::{setup_audit_fk, util::{default_audited_table_statement, default_table_statement, DefaultColumn}};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(DbBackend::Postgres);

        manager.create_type(schema.create_enum_from_active_enum::<RoleType>()).await.unwrap();
        manager.create_type(schema.create_enum_from_active_enum::<SalaryPeriod>()).await.unwrap();
        manager.create_type(schema.create_enum_from_active_enum::<TimesheetStatus>()).await.unwrap();
        manager.create_type(schema.create_enum_from_active_enum::<PeriodFrequency>()).await.unwrap();
        manager.create_type(schema.create_enum_from_active_enum::<PeriodStatus>()).await.unwrap();
        manager.create_type(schema.create_enum_from_active_enum::<RunStatus>()).await.unwrap();
        manager.create_type(schema.create_enum_from_active_enum::<SlipStatus>()).await.unwrap();
        manager.create_type(schema.create_enum_from_active_enum::<PayItemKind>()).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(User::Table)
                .col(ColumnDef::new(User::TenantId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(User::Username)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(User::Password)
                    .binary()
                    .not_null()) // Password should be in a hashed format
                .col(ColumnDef::new(User::Role)
                    .custom(RoleType::name())
                    .not_null())
                .take()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Employment::Table)
                .col(ColumnDef::new(Employment::TenantId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(Employment::UserId)
                    .uuid())
                .col(ColumnDef::new(Employment::DisplayName)
                    .text()
                    .not_null())
                .col(ColumnDef::new(Employment::BaseSalary)
                    .double()
                    .not_null())
                .col(ColumnDef::new(Employment::SalaryPeriod)
                    .custom(SalaryPeriod::name())
                    .not_null())
                .col(ColumnDef::new(Employment::CurrencyCode)
                    .text()
                    .not_null())
                .col(ColumnDef::new(Employment::BranchId)
                    .uuid())
                .col(ColumnDef::new(Employment::RiskLevel)
                    .small_integer())
                .col(ColumnDef::new(Employment::Active)
                    .boolean()
                    .not_null()
                    .default(true))
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Employment::Table, Employment::UserId)
            .to(User::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Timesheet::Table)
                .col(ColumnDef::new(Timesheet::EmploymentId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(Timesheet::WorkDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(Timesheet::NetWorkedMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(Timesheet::OvertimeMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(Timesheet::NightMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(Timesheet::HolidayMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(Timesheet::LateMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(Timesheet::Status)
                    .custom(TimesheetStatus::name())
                    .not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Timesheet::Table, Timesheet::EmploymentId)
            .to(Employment::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(LaborRules::Table)
                .col(ColumnDef::new(LaborRules::CountryCode)
                    .text()
                    .not_null())
                .col(ColumnDef::new(LaborRules::Year)
                    .integer()
                    .not_null())
                .col(ColumnDef::new(LaborRules::ValidFrom)
                    .date()
                    .not_null())
                .col(ColumnDef::new(LaborRules::Active)
                    .boolean()
                    .not_null()
                    .default(true))
                .col(ColumnDef::new(LaborRules::MinimumWage).double().not_null())
                .col(ColumnDef::new(LaborRules::TransportAllowance).double().not_null())
                .col(ColumnDef::new(LaborRules::TransportAllowanceThreshold).double().not_null())
                .col(ColumnDef::new(LaborRules::HealthEmployeePct).double().not_null())
                .col(ColumnDef::new(LaborRules::PensionEmployeePct).double().not_null())
                .col(ColumnDef::new(LaborRules::SolidarityFundPct).double().not_null())
                .col(ColumnDef::new(LaborRules::HealthEmployerPct).double().not_null())
                .col(ColumnDef::new(LaborRules::PensionEmployerPct).double().not_null())
                .col(ColumnDef::new(LaborRules::ParafiscalPct).double().not_null())
                .col(ColumnDef::new(LaborRules::ArlLevel1).double().not_null())
                .col(ColumnDef::new(LaborRules::ArlLevel2).double().not_null())
                .col(ColumnDef::new(LaborRules::ArlLevel3).double().not_null())
                .col(ColumnDef::new(LaborRules::ArlLevel4).double().not_null())
                .col(ColumnDef::new(LaborRules::ArlLevel5).double().not_null())
                .col(ColumnDef::new(LaborRules::OvertimeDayMultiplier).double().not_null())
                .col(ColumnDef::new(LaborRules::OvertimeNightMultiplier).double().not_null())
                .col(ColumnDef::new(LaborRules::NightSurchargeMultiplier).double().not_null())
                .col(ColumnDef::new(LaborRules::SundayHolidayMultiplier).double().not_null())
                .col(ColumnDef::new(LaborRules::SeveranceRate).double().not_null())
                .col(ColumnDef::new(LaborRules::SeveranceInterestRate).double().not_null())
                .col(ColumnDef::new(LaborRules::VacationRate).double().not_null())
                .col(ColumnDef::new(LaborRules::BonusRate).double().not_null())
                .take()
            ).await.unwrap();

        manager
            .create_table(default_audited_table_statement()
                .table(PayPeriod::Table)
                .col(ColumnDef::new(PayPeriod::TenantId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PayPeriod::CountryCode)
                    .text()
                    .not_null())
                .col(ColumnDef::new(PayPeriod::PeriodStart)
                    .date()
                    .not_null())
                .col(ColumnDef::new(PayPeriod::PeriodEnd)
                    .date()
                    .not_null())
                .col(ColumnDef::new(PayPeriod::Frequency)
                    .custom(PeriodFrequency::name())
                    .not_null())
                .col(ColumnDef::new(PayPeriod::Status)
                    .custom(PeriodStatus::name())
                    .not_null())
                .col(ColumnDef::new(PayPeriod::TotalGross).double().not_null().default(0))
                .col(ColumnDef::new(PayPeriod::TotalDeductions).double().not_null().default(0))
                .col(ColumnDef::new(PayPeriod::TotalNet).double().not_null().default(0))
                .col(ColumnDef::new(PayPeriod::TotalEmployerCost).double().not_null().default(0))
                .col(ColumnDef::new(PayPeriod::TotalEmployees).integer().not_null().default(0))
                .take()
            ).await.unwrap();
        setup_audit_fk!(manager, PayPeriod::Table);

        manager
            .create_table(default_table_statement()
                .table(PayRun::Table)
                .col(ColumnDef::new(PayRun::PayPeriodId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PayRun::RunNumber)
                    .integer()
                    .not_null())
                .col(ColumnDef::new(PayRun::Status)
                    .custom(RunStatus::name())
                    .not_null())
                .col(ColumnDef::new(PayRun::IsFinal)
                    .boolean()
                    .not_null()
                    .default(false))
                .col(ColumnDef::new(PayRun::ExecutedBy)
                    .uuid())
                .col(ColumnDef::new(PayRun::Created).integer().not_null().default(0))
                .col(ColumnDef::new(PayRun::Skipped).integer().not_null().default(0))
                .col(ColumnDef::new(PayRun::Errors).integer().not_null().default(0))
                .col(ColumnDef::new(PayRun::TotalGross).double().not_null().default(0))
                .col(ColumnDef::new(PayRun::TotalDeductions).double().not_null().default(0))
                .col(ColumnDef::new(PayRun::TotalNet).double().not_null().default(0))
                .col(ColumnDef::new(PayRun::TotalEmployerCost).double().not_null().default(0))
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PayRun::Table, PayRun::PayPeriodId)
            .to(PayPeriod::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PayRun::Table, PayRun::ExecutedBy)
            .to(User::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .take()
        ).await.unwrap();

        // One run number per period.
        manager.create_index(IndexCreateStatement::new()
            .table(PayRun::Table)
            .name("idx_pay_run_period_run_number")
            .col(PayRun::PayPeriodId)
            .col(PayRun::RunNumber)
            .unique()
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(PaySlip::Table)
                .col(ColumnDef::new(PaySlip::PayRunId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PaySlip::EmploymentId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PaySlip::Status)
                    .custom(SlipStatus::name())
                    .not_null())
                .col(ColumnDef::new(PaySlip::CurrencyCode)
                    .text()
                    .not_null())
                .col(ColumnDef::new(PaySlip::DaysWorked).integer().not_null())
                .col(ColumnDef::new(PaySlip::RegularHours).double().not_null())
                .col(ColumnDef::new(PaySlip::OvertimeDayHours).double().not_null())
                .col(ColumnDef::new(PaySlip::OvertimeNightHours).double().not_null())
                .col(ColumnDef::new(PaySlip::HolidayHours).double().not_null())
                .col(ColumnDef::new(PaySlip::BaseSalary).double().not_null())
                .col(ColumnDef::new(PaySlip::BasicSalary).double().not_null())
                .col(ColumnDef::new(PaySlip::TransportAllowance).double().not_null())
                .col(ColumnDef::new(PaySlip::OvertimePay).double().not_null())
                .col(ColumnDef::new(PaySlip::NightPremium).double().not_null())
                .col(ColumnDef::new(PaySlip::HolidayPremium).double().not_null())
                .col(ColumnDef::new(PaySlip::GrossPay).double().not_null())
                .col(ColumnDef::new(PaySlip::HealthDeduction).double().not_null())
                .col(ColumnDef::new(PaySlip::PensionDeduction).double().not_null())
                .col(ColumnDef::new(PaySlip::SolidarityFundDeduction).double().not_null())
                .col(ColumnDef::new(PaySlip::OtherDeductions).double().not_null())
                .col(ColumnDef::new(PaySlip::TotalDeductions).double().not_null())
                .col(ColumnDef::new(PaySlip::NetPay).double().not_null())
                .col(ColumnDef::new(PaySlip::EmployerHealth).double().not_null())
                .col(ColumnDef::new(PaySlip::EmployerPension).double().not_null())
                .col(ColumnDef::new(PaySlip::EmployerArl).double().not_null())
                .col(ColumnDef::new(PaySlip::EmployerParafiscal).double().not_null())
                .col(ColumnDef::new(PaySlip::SeveranceProvision).double().not_null())
                .col(ColumnDef::new(PaySlip::SeveranceInterestProvision).double().not_null())
                .col(ColumnDef::new(PaySlip::VacationProvision).double().not_null())
                .col(ColumnDef::new(PaySlip::BonusProvision).double().not_null())
                .col(ColumnDef::new(PaySlip::TotalEmployerCost).double().not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PaySlip::Table, PaySlip::PayRunId)
            .to(PayRun::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PaySlip::Table, PaySlip::EmploymentId)
            .to(Employment::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        // One slip per employment per run.
        manager.create_index(IndexCreateStatement::new()
            .table(PaySlip::Table)
            .name("idx_pay_slip_run_employment")
            .col(PaySlip::PayRunId)
            .col(PaySlip::EmploymentId)
            .unique()
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(PayItem::Table)
                .col(ColumnDef::new(PayItem::PaySlipId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PayItem::Kind)
                    .custom(PayItemKind::name())
                    .not_null())
                .col(ColumnDef::new(PayItem::Code)
                    .text()
                    .not_null())
                .col(ColumnDef::new(PayItem::Label)
                    .text()
                    .not_null())
                .col(ColumnDef::new(PayItem::Amount).double().not_null())
                .col(ColumnDef::new(PayItem::Taxable).boolean().not_null())
                .col(ColumnDef::new(PayItem::AffectsSocialSecurity).boolean().not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PayItem::Table, PayItem::PaySlipId)
            .to(PaySlip::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(
            TableDropStatement::new()
                .table(PayItem::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(PaySlip::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(PayRun::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(PayPeriod::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(LaborRules::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Timesheet::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Employment::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(User::Table)
                .take()
        ).await.unwrap();

        manager.drop_type(TypeDropStatement::new().name(PayItemKind::name()).to_owned()).await.unwrap();
        manager.drop_type(TypeDropStatement::new().name(SlipStatus::name()).to_owned()).await.unwrap();
        manager.drop_type(TypeDropStatement::new().name(RunStatus::name()).to_owned()).await.unwrap();
        manager.drop_type(TypeDropStatement::new().name(PeriodStatus::name()).to_owned()).await.unwrap();
        manager.drop_type(TypeDropStatement::new().name(PeriodFrequency::name()).to_owned()).await.unwrap();
        manager.drop_type(TypeDropStatement::new().name(TimesheetStatus::name()).to_owned()).await.unwrap();
        manager.drop_type(TypeDropStatement::new().name(SalaryPeriod::name()).to_owned()).await.unwrap();
        manager.drop_type(TypeDropStatement::new().name(RoleType::name()).to_owned()).await.unwrap();

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum User {
    Table,
    TenantId,
    Username,
    Password,
    Role,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role_type")]
enum RoleType {
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Iden)]
pub(crate) enum Employment {
    Table,
    TenantId,
    UserId,
    DisplayName,
    BaseSalary,
    SalaryPeriod,
    CurrencyCode,
    BranchId,
    RiskLevel,
    Active,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "salary_period")]
enum SalaryPeriod {
    #[sea_orm(string_value = "hourly")]
    Hourly,
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "biweekly")]
    Biweekly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

#[derive(Iden)]
enum Timesheet {
    Table,
    EmploymentId,
    WorkDate,
    NetWorkedMinutes,
    OvertimeMinutes,
    NightMinutes,
    HolidayMinutes,
    LateMinutes,
    Status,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "timesheet_status")]
enum TimesheetStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Iden)]
pub(crate) enum LaborRules {
    Table,
    CountryCode,
    Year,
    ValidFrom,
    Active,
    MinimumWage,
    TransportAllowance,
    TransportAllowanceThreshold,
    HealthEmployeePct,
    PensionEmployeePct,
    SolidarityFundPct,
    HealthEmployerPct,
    PensionEmployerPct,
    ParafiscalPct,
    ArlLevel1,
    ArlLevel2,
    ArlLevel3,
    ArlLevel4,
    ArlLevel5,
    OvertimeDayMultiplier,
    OvertimeNightMultiplier,
    NightSurchargeMultiplier,
    SundayHolidayMultiplier,
    SeveranceRate,
    SeveranceInterestRate,
    VacationRate,
    BonusRate,
}

#[derive(Iden)]
enum PayPeriod {
    Table,
    TenantId,
    CountryCode,
    PeriodStart,
    PeriodEnd,
    Frequency,
    Status,
    TotalGross,
    TotalDeductions,
    TotalNet,
    TotalEmployerCost,
    TotalEmployees,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "period_frequency")]
enum PeriodFrequency {
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "biweekly")]
    Biweekly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "period_status")]
enum PeriodStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "calculating")]
    Calculating,
    #[sea_orm(string_value = "reviewing")]
    Reviewing,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Iden)]
enum PayRun {
    Table,
    PayPeriodId,
    RunNumber,
    Status,
    IsFinal,
    ExecutedBy,
    Created,
    Skipped,
    Errors,
    TotalGross,
    TotalDeductions,
    TotalNet,
    TotalEmployerCost,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "run_status")]
enum RunStatus {
    #[sea_orm(string_value = "calculating")]
    Calculating,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "error")]
    Error,
    #[sea_orm(string_value = "superseded")]
    Superseded,
}

#[derive(Iden)]
enum PaySlip {
    Table,
    PayRunId,
    EmploymentId,
    Status,
    CurrencyCode,
    DaysWorked,
    RegularHours,
    OvertimeDayHours,
    OvertimeNightHours,
    HolidayHours,
    BaseSalary,
    BasicSalary,
    TransportAllowance,
    OvertimePay,
    NightPremium,
    HolidayPremium,
    GrossPay,
    HealthDeduction,
    PensionDeduction,
    SolidarityFundDeduction,
    OtherDeductions,
    TotalDeductions,
    NetPay,
    EmployerHealth,
    EmployerPension,
    EmployerArl,
    EmployerParafiscal,
    SeveranceProvision,
    SeveranceInterestProvision,
    VacationProvision,
    BonusProvision,
    TotalEmployerCost,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "slip_status")]
enum SlipStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "paid")]
    Paid,
}

#[derive(Iden)]
enum PayItem {
    Table,
    PaySlipId,
    Kind,
    Code,
    Label,
    Amount,
    Taxable,
    AffectsSocialSecurity,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "pay_item_kind")]
enum PayItemKind {
    #[sea_orm(string_value = "earning")]
    Earning,
    #[sea_orm(string_value = "deduction")]
    Deduction,
    #[sea_orm(string_value = "employer_contribution")]
    EmployerContribution,
}
