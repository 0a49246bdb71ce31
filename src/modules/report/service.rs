use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::collections::HashMap;

/// rendered for unset references, eg: a car without a parking address
const EMPTY_FIELD_PLACEHOLDER: &str = "—";

/// Builds the fleet state report as a CSV document
///
/// the document is a sequence of sections (parking addresses, cars, users,
/// rental services and bookings), each with a title row, a header row and
/// one row per record in primary key order, separated by blank lines.
///
/// sections are independent point-in-time reads, there is no snapshot
/// isolation between them
pub async fn car_park_report_csv(db: &DatabaseConnection) -> Result<Vec<u8>> {
    let addresses = entity::parking_address::Entity::find()
        .order_by_asc(entity::parking_address::Column::Id)
        .all(db)
        .await?;

    let statuses = entity::status::Entity::find()
        .order_by_asc(entity::status::Column::Id)
        .all(db)
        .await?;

    let roles = entity::role::Entity::find()
        .order_by_asc(entity::role::Column::Id)
        .all(db)
        .await?;

    let licenses = entity::driver_license::Entity::find()
        .order_by_asc(entity::driver_license::Column::Id)
        .all(db)
        .await?;

    let users = entity::user::Entity::find()
        .order_by_asc(entity::user::Column::Id)
        .all(db)
        .await?;

    let cars = entity::car::Entity::find()
        .order_by_asc(entity::car::Column::Id)
        .all(db)
        .await?;

    let services = entity::rental_service::Entity::find()
        .order_by_asc(entity::rental_service::Column::Id)
        .all(db)
        .await?;

    let bookings = entity::booking::Entity::find()
        .order_by_asc(entity::booking::Column::Id)
        .all(db)
        .await?;

    let street_by_address_id: HashMap<i32, String> = addresses
        .iter()
        .map(|a| (a.id, a.street.clone()))
        .collect();

    let name_by_status_id: HashMap<i32, String> =
        statuses.iter().map(|s| (s.id, s.name.clone())).collect();

    let name_by_role_id: HashMap<i32, String> =
        roles.iter().map(|r| (r.id, r.name.clone())).collect();

    let number_by_license_id: HashMap<i32, String> = licenses
        .iter()
        .map(|l| (l.id, l.license_number.clone()))
        .collect();

    let full_name_by_user_id: HashMap<i32, String> = users
        .iter()
        .map(|u| (u.id, format!("{} {}", u.name, u.surname)))
        .collect();

    let plate_by_car_id: HashMap<i32, String> = cars
        .iter()
        .map(|c| (c.id, c.plate_number.clone()))
        .collect();

    let mut sections: Vec<Vec<Vec<String>>> = Vec::new();

    sections.push(vec![vec![String::from("Отчёт о состоянии автопарка")]]);

    let mut address_section = vec![
        vec![String::from("Парковочные адреса")],
        str_row(&["ID", "Улица", "Дом"]),
    ];
    for a in &addresses {
        address_section.push(vec![a.id.to_string(), a.street.clone(), a.house_number.clone()]);
    }
    sections.push(address_section);

    let mut car_section = vec![
        vec![String::from("Автомобили")],
        str_row(&["ID", "Парковка", "Статус", "Бренд", "Модель", "Номер"]),
    ];
    for c in &cars {
        car_section.push(vec![
            c.id.to_string(),
            resolve(&street_by_address_id, c.parking_address_id),
            resolve(&name_by_status_id, c.status_id),
            c.brand.clone(),
            c.model.clone(),
            c.plate_number.clone(),
        ]);
    }
    sections.push(car_section);

    let mut user_section = vec![
        vec![String::from("Пользователи")],
        str_row(&["ID", "Имя", "Фамилия", "Роль", "Водительское удостоверение"]),
    ];
    for u in &users {
        user_section.push(vec![
            u.id.to_string(),
            u.name.clone(),
            u.surname.clone(),
            resolve(&name_by_role_id, u.role_id),
            resolve(&number_by_license_id, u.driver_license_id),
        ]);
    }
    sections.push(user_section);

    let mut service_section = vec![
        vec![String::from("Услуги")],
        str_row(&["ID", "Тип аренды", "Сумма"]),
    ];
    for s in &services {
        service_section.push(vec![
            s.id.to_string(),
            s.rental_type.clone(),
            s.amount.to_string(),
        ]);
    }
    sections.push(service_section);

    let mut booking_section = vec![
        vec![String::from("Бронирования")],
        str_row(&["ID", "Пользователь", "Автомобиль", "Дата начала", "Дата окончания"]),
    ];
    for b in &bookings {
        booking_section.push(vec![
            b.id.to_string(),
            resolve(&full_name_by_user_id, b.user_id),
            resolve(&plate_by_car_id, b.car_id),
            b.start_date.to_string(),
            b.end_date.to_string(),
        ]);
    }
    sections.push(booking_section);

    let mut document = Vec::new();

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            document.push(b'\n');
        }

        // each section gets its own writer since rows within a section
        // have different lengths and sections are separated by blank lines
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        for row in section {
            writer.write_record(row)?;
        }

        document.extend(writer.into_inner()?);
    }

    Ok(document)
}

fn str_row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| String::from(*f)).collect()
}

fn resolve(map: &HashMap<i32, String>, id: Option<i32>) -> String {
    id.and_then(|id| map.get(&id).cloned())
        .unwrap_or_else(|| String::from(EMPTY_FIELD_PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_db;
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, Set};

    async fn report_lines(db: &DatabaseConnection) -> Vec<String> {
        let bytes = car_park_report_csv(db).await.unwrap();

        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[tokio::test]
    async fn empty_store_renders_all_section_headers() {
        let db = test_db().await;

        let lines = report_lines(&db).await;

        let expected = vec![
            "Отчёт о состоянии автопарка",
            "",
            "Парковочные адреса",
            "ID,Улица,Дом",
            "",
            "Автомобили",
            "ID,Парковка,Статус,Бренд,Модель,Номер",
            "",
            "Пользователи",
            "ID,Имя,Фамилия,Роль,Водительское удостоверение",
            "",
            "Услуги",
            "ID,Тип аренды,Сумма",
            "",
            "Бронирования",
            "ID,Пользователь,Автомобиль,Дата начала,Дата окончания",
        ];

        assert_eq!(lines, expected);
    }

    #[tokio::test]
    async fn parking_addresses_render_street_and_house() {
        let db = test_db().await;

        let address = entity::parking_address::ActiveModel {
            created_at: Set(Utc::now().into()),
            street: Set(String::from("Main")),
            house_number: Set(String::from("12")),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let lines = report_lines(&db).await;
        let expected_row = format!("{},Main,12", address.id);

        assert!(lines.contains(&expected_row));
    }

    #[tokio::test]
    async fn unresolved_references_render_the_placeholder() {
        let db = test_db().await;

        let car = entity::car::ActiveModel {
            created_at: Set(Utc::now().into()),
            brand: Set(String::from("Lada")),
            model: Set(String::from("Vesta")),
            plate_number: Set(String::from("X123")),
            parking_address_id: Set(None),
            status_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let lines = report_lines(&db).await;
        let expected_row = format!("{},—,—,Lada,Vesta,X123", car.id);

        assert!(lines.contains(&expected_row));
    }

    #[tokio::test]
    async fn bookings_resolve_user_name_and_car_plate() {
        let db = test_db().await;

        let user = entity::user::ActiveModel {
            created_at: Set(Utc::now().into()),
            name: Set(String::from("Alice")),
            surname: Set(String::from("Smith")),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let car = entity::car::ActiveModel {
            created_at: Set(Utc::now().into()),
            brand: Set(String::from("Lada")),
            model: Set(String::from("Vesta")),
            plate_number: Set(String::from("X123")),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let booking = entity::booking::ActiveModel {
            created_at: Set(Utc::now().into()),
            start_date: Set(chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()),
            end_date: Set(chrono::NaiveDate::from_ymd_opt(2025, 4, 7).unwrap()),
            status: Set(entity::booking::BookingStatus::Active),
            user_id: Set(Some(user.id)),
            car_id: Set(Some(car.id)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let lines = report_lines(&db).await;
        let expected_row = format!("{},Alice Smith,X123,2025-04-01,2025-04-07", booking.id);

        assert!(lines.contains(&expected_row));
    }
}
