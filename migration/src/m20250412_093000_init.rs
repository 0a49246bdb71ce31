use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .col(pk_auto(Role::Id))
                    .col(timestamp_with_time_zone(Role::CreatedAt))
                    .col(string(Role::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DriverLicense::Table)
                    .col(pk_auto(DriverLicense::Id))
                    .col(timestamp_with_time_zone(DriverLicense::CreatedAt))
                    .col(string(DriverLicense::OwnerName))
                    .col(string(DriverLicense::Surname))
                    .col(date(DriverLicense::DateOfBirth))
                    .col(date(DriverLicense::ValidUntil))
                    .col(string(DriverLicense::LicenseNumber))
                    .col(string(DriverLicense::Categories))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(pk_auto(User::Id))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(string(User::Name))
                    .col(string(User::Surname))
                    .col(integer_null(User::RoleId))
                    .col(integer_null(User::DriverLicenseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_role_id")
                            .from(User::Table, User::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_driver_license_id")
                            .from(User::Table, User::DriverLicenseId)
                            .to(DriverLicense::Table, DriverLicense::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ParkingAddress::Table)
                    .col(pk_auto(ParkingAddress::Id))
                    .col(timestamp_with_time_zone(ParkingAddress::CreatedAt))
                    .col(string(ParkingAddress::Street))
                    .col(string(ParkingAddress::HouseNumber))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .col(pk_auto(Status::Id))
                    .col(timestamp_with_time_zone(Status::CreatedAt))
                    .col(string(Status::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .col(pk_auto(Car::Id))
                    .col(timestamp_with_time_zone(Car::CreatedAt))
                    .col(string(Car::Brand))
                    .col(string(Car::Model))
                    .col(string(Car::PlateNumber))
                    .col(integer_null(Car::ParkingAddressId))
                    .col(integer_null(Car::StatusId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_parking_address_id")
                            .from(Car::Table, Car::ParkingAddressId)
                            .to(ParkingAddress::Table, ParkingAddress::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_status_id")
                            .from(Car::Table, Car::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RentalService::Table)
                    .col(pk_auto(RentalService::Id))
                    .col(timestamp_with_time_zone(RentalService::CreatedAt))
                    .col(string(RentalService::RentalType))
                    .col(double(RentalService::Amount))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .col(pk_auto(Booking::Id))
                    .col(timestamp_with_time_zone(Booking::CreatedAt))
                    .col(date(Booking::StartDate))
                    .col(date(Booking::EndDate))
                    .col(string_len(Booking::Status, 16))
                    .col(integer_null(Booking::UserId))
                    .col(integer_null(Booking::CarId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_car_id")
                            .from(Booking::Table, Booking::CarId)
                            .to(Car::Table, Car::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CarInspection::Table)
                    .col(pk_auto(CarInspection::Id))
                    .col(timestamp_with_time_zone(CarInspection::CreatedAt))
                    .col(integer_null(CarInspection::UserId))
                    .col(integer_null(CarInspection::CarId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_inspection_user_id")
                            .from(CarInspection::Table, CarInspection::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_inspection_car_id")
                            .from(CarInspection::Table, CarInspection::CarId)
                            .to(Car::Table, Car::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .col(pk_auto(Notification::Id))
                    .col(timestamp_with_time_zone(Notification::CreatedAt))
                    .col(string(Notification::Message))
                    .col(integer_null(Notification::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_user_id")
                            .from(Notification::Table, Notification::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .col(pk_auto(Account::Id))
                    .col(timestamp_with_time_zone(Account::CreatedAt))
                    .col(string(Account::Username))
                    .col(string(Account::Email))
                    .col(string(Account::Password))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("account_username_unique")
                    .table(Account::Table)
                    .col(Account::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("account_email_unique")
                    .table(Account::Table)
                    .col(Account::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .col(
                        ColumnDef::new(Session::SessionToken)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(timestamp_with_time_zone(Session::CreatedAt))
                    .col(timestamp_with_time_zone(Session::ExpiresAt))
                    .col(string(Session::UserAgent))
                    .col(integer(Session::AccountId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_account_id")
                            .from(Session::Table, Session::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CarInspection::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RentalService::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Status::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ParkingAddress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DriverLicense::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
    CreatedAt,
    Name,
}

#[derive(DeriveIden)]
enum DriverLicense {
    Table,
    Id,
    CreatedAt,
    OwnerName,
    Surname,
    DateOfBirth,
    ValidUntil,
    LicenseNumber,
    Categories,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    CreatedAt,
    Name,
    Surname,
    RoleId,
    DriverLicenseId,
}

#[derive(DeriveIden)]
enum ParkingAddress {
    Table,
    Id,
    CreatedAt,
    Street,
    HouseNumber,
}

#[derive(DeriveIden)]
enum Status {
    Table,
    Id,
    CreatedAt,
    Name,
}

#[derive(DeriveIden)]
enum Car {
    Table,
    Id,
    CreatedAt,
    Brand,
    Model,
    PlateNumber,
    ParkingAddressId,
    StatusId,
}

#[derive(DeriveIden)]
enum RentalService {
    Table,
    Id,
    CreatedAt,
    RentalType,
    Amount,
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    CreatedAt,
    StartDate,
    EndDate,
    Status,
    UserId,
    CarId,
}

#[derive(DeriveIden)]
enum CarInspection {
    Table,
    Id,
    CreatedAt,
    UserId,
    CarId,
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    CreatedAt,
    Message,
    UserId,
}

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
    CreatedAt,
    Username,
    Email,
    Password,
}

#[derive(DeriveIden)]
enum Session {
    Table,
    SessionToken,
    CreatedAt,
    ExpiresAt,
    UserAgent,
    AccountId,
}
