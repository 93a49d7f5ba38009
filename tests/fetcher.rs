use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};
use chrono::NaiveDate;
use privat_rates::{DateKey, Fetcher, fetcher, formatter};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct RatesQuery {
    date: String,
}

#[derive(Clone, Default)]
struct MockBank {
    failing: Vec<String>,
    malformed: Vec<String>,
    /// Delays earlier dates of the month more, so responses finish in
    /// the reverse of request order.
    stagger: bool,
}

async fn exchange_rates(query: web::Query<RatesQuery>, bank: web::Data<MockBank>) -> HttpResponse {
    let date = query.into_inner().date;

    if bank.stagger {
        let day: u64 = date[..2].parse().unwrap_or(0);
        actix_web::rt::time::sleep(Duration::from_millis(day * 40)).await;
    }
    if bank.failing.contains(&date) {
        return HttpResponse::InternalServerError().finish();
    }
    if bank.malformed.contains(&date) {
        return HttpResponse::Ok()
            .content_type("application/json")
            .body("{\"exchangeRate\": oops");
    }

    HttpResponse::Ok().json(json!({
        "date": date,
        "bank": "PB",
        "baseCurrency": 980,
        "baseCurrencyLit": "UAH",
        "exchangeRate": [
            {"baseCurrency": "UAH", "saleRateNB": 1.0, "purchaseRateNB": 1.0},
            {"baseCurrency": "UAH", "currency": "USD", "saleRateNB": 40.1,
             "purchaseRateNB": 40.1, "saleRate": 40.5, "purchaseRate": 39.9},
            {"baseCurrency": "UAH", "currency": "EUR", "saleRateNB": 43.7, "purchaseRateNB": 43.7},
            {"baseCurrency": "UAH", "currency": "GBP", "saleRate": 51.0, "purchaseRate": 50.0}
        ]
    }))
}

fn start_bank(bank: MockBank) -> std::io::Result<String> {
    let data = web::Data::new(bank);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/p24api/exchange_rates", web::get().to(exchange_rates))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Ok(format!("http://{addr}/p24api/exchange_rates"))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()
}

fn expected_dates(days: u64) -> Vec<String> {
    fetcher::date_keys(today(), days)
        .unwrap()
        .iter()
        .map(DateKey::to_string)
        .collect()
}

#[actix_web::test]
async fn test_results_follow_request_order() {
    let url = start_bank(MockBank {
        stagger: true,
        ..Default::default()
    })
    .unwrap();

    for days in [1, 4, 10] {
        let fetcher = Fetcher::new(days).unwrap().with_api_url(url.clone());
        let results = fetcher.get_rates_before(today()).await.unwrap();

        let dates: Vec<String> = results
            .iter()
            .map(|day| day.as_ref().unwrap().date.clone())
            .collect();
        assert_eq!(dates, expected_dates(days as u64));
    }
}

#[actix_web::test]
async fn test_server_error_only_drops_that_day() {
    let url = start_bank(MockBank {
        failing: vec!["08.01.2024".to_string()],
        ..Default::default()
    })
    .unwrap();
    let fetcher = Fetcher::new(5).unwrap().with_api_url(url);

    let results = fetcher.get_rates_before(today()).await.unwrap();

    assert_eq!(results.len(), 5);
    assert!(results[2].is_none());
    assert_eq!(results.iter().filter(|r| r.is_some()).count(), 4);

    let formatted = formatter::format_data(&results, &formatter::currency_set(["EUR", "USD"])).unwrap();
    let dates: Vec<&str> = formatted.iter().map(|r| r.date()).collect();
    assert_eq!(dates, ["10.01.2024", "09.01.2024", "07.01.2024", "06.01.2024"]);
}

#[actix_web::test]
async fn test_malformed_body_is_absent() {
    let url = start_bank(MockBank {
        malformed: vec!["10.01.2024".to_string()],
        ..Default::default()
    })
    .unwrap();
    let fetcher = Fetcher::new(2).unwrap().with_api_url(url);

    let results = fetcher.get_rates_before(today()).await.unwrap();

    assert!(results[0].is_none());
    assert_eq!(results[1].as_ref().unwrap().date, "09.01.2024");
}

#[actix_web::test]
async fn test_fetch_and_format() {
    let url = start_bank(MockBank::default()).unwrap();
    let fetcher = Fetcher::new(1).unwrap().with_api_url(url);

    let results = fetcher.get_rates_before(today()).await.unwrap();
    let formatted = formatter::format_data(&results, &formatter::currency_set(["USD", "EUR"])).unwrap();

    assert_eq!(
        serde_json::to_value(&formatted).unwrap(),
        json!([{
            "10.01.2024": {
                "EUR": {"sale": 43.7, "purchase": 43.7},
                "USD": {"sale": 40.5, "purchase": 39.9}
            }
        }])
    );
}
