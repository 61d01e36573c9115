//! End-to-end extraction tests over in-memory page texts.
//!
//! These drive the full pipeline (classify, assemble, normalize, filter)
//! exactly as the CLI does after PDF text extraction.

use statement_extract::{export, parse_pages};

const SECTION: &str = "Расшифровка операций";

#[test]
fn test_two_page_statement_end_to_end() {
    let page1 = format!(
        "ПАО Банк\n\
         Выписка по счёту\n\
         {}\n\
         01.01.2024 12:00 123456 Продукты -1 000,00 5 000,00\n\
         01.01.2024 Покупка в магазине\n\
         Продолжение на следующей странице\n",
        SECTION
    );
    let page2 = "02.01.2024 09:30 234567 Переводы +2 500,00 7 500,00\n\
                 02.01.2024 Перевод от клиента. Операция по карте *9876\n\
                 Для проверки подлинности документа\n"
        .to_string();

    let records = parse_pages([page1, page2]).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].date, "01.01.2024");
    assert_eq!(records[0].category, "Продукты");
    assert_eq!(records[0].description, "Покупка в магазине");
    assert_eq!(records[0].amount, "-1000.00");
    assert_eq!(records[0].balance, "5000.00");

    assert_eq!(records[1].date, "02.01.2024");
    assert_eq!(records[1].category, "Переводы");
    assert_eq!(records[1].description, "Перевод от клиента");
    assert_eq!(records[1].amount, "2500.00");
    assert_eq!(records[1].balance, "7500.00");
}

#[test]
fn test_record_spanning_a_page_break() {
    // Footer on page 1 must not finalize the open record; the page-2
    // continuation still belongs to it.
    let page1 = format!(
        "{}\n\
         01.01.2024 12:00 123456 Продукты -1 000,00 5 000,00\n\
         01.01.2024 Покупка\n\
         Продолжение на следующей странице\n",
        SECTION
    );
    let page2 = "01.01.2024 Оплата. Операция по карте *1234\n".to_string();

    let records = parse_pages([page1, page2]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "Покупка Оплата");
}

#[test]
fn test_repeated_operations_deduplicate() {
    // Statements repeat the last row of a page at the top of the next one
    let header = "01.01.2024 12:00 123456 Продукты -1 000,00 5 000,00";
    let page1 = format!("{}\n{}\n", SECTION, header);
    let page2 = format!("{}\n", header);

    let records = parse_pages([page1, page2]).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_statement_without_section_marker_yields_nothing() {
    let page = "01.01.2024 12:00 123456 Продукты -1 000,00 5 000,00\n\
                01.01.2024 Покупка в магазине\n";
    let records = parse_pages([page]).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_unsigned_amount_boundary() {
    // The header shape allows a missing sign; such amounts come out negative
    let page = format!(
        "{}\n01.01.2024 12:00 123456 Продукты 1 000,00 2 000,00\n",
        SECTION
    );
    let records = parse_pages([page]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount, "-1000.00");
}

#[test]
fn test_csv_export_of_parsed_records() {
    let page = format!(
        "{}\n\
         01.01.2024 12:00 123456 Продукты -1 000,00 5 000,00\n\
         01.01.2024 Покупка в магазине\n",
        SECTION
    );
    let records = parse_pages([page]).unwrap();

    let mut output = Vec::new();
    export::write_csv(&records, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.starts_with("Дата операции,Категория,Описание операции,Сумма операции,Сальдо"));
    assert!(text.contains("01.01.2024,Продукты,Покупка в магазине,-1000.00,5000.00"));
}
