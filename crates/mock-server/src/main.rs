//! 開発用モック分析バックエンド
//!
//! 本物の分析APIと同じエンドポイント（`/query`, `/schema`, `/examples`,
//! `/`）を提供する。回答は質問文のキーワードで出し分ける固定データで、
//! 行数だけ乱数で揺らす。`ICONTRACT_API_URL=http://127.0.0.1:<port>` を
//! 指定してGUIから接続する。

use clap::Parser;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};
use warp::Filter;

#[derive(Parser, Debug)]
#[command(name = "mock-server", about = "Mock analytics backend for development")]
struct Args {
    /// Listen port
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Simulated processing delay in milliseconds
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    question: String,
    #[serde(default)]
    #[allow(dead_code)]
    include_sql: Option<bool>,
    #[serde(default)]
    #[allow(dead_code)]
    include_data: Option<bool>,
}

const MODELS: &[&str] = &[
    "iPhone 17",
    "iPhone 17 Pro",
    "iPhone 17 Pro Max",
    "iPhone 16",
    "iPhone 16 Plus",
];

const BRANCHES: &[&str] = &["สยามพารากอน", "เซ็นทรัลเวิลด์", "เมกาบางนา", "ไอคอนสยาม"];

/// 質問のキーワードから分類して固定レスポンスを組み立てる
fn build_response(question: &str) -> Value {
    let mut rng = rand::thread_rng();

    if question.contains("สต็อค") || question.contains("Stock") || question.contains("สต็อก") {
        let rows: Vec<Value> = MODELS
            .iter()
            .map(|model| {
                json!({
                    "model": model,
                    "available": rng.gen_range(20..400),
                })
            })
            .collect();
        let total: i64 = rows.iter().map(|r| r["available"].as_i64().unwrap()).sum();

        json!({
            "question": question,
            "answer": format!("มีสต็อค iPhone พร้อมส่งมอบทั้งหมด {} เครื่อง", total),
            "sql": "SELECT model, COUNT(*) AS available FROM inventory WHERE status = 'ready' GROUP BY model",
            "data": rows,
            "metadata": {"row_count": MODELS.len(), "columns": ["model", "available"]},
        })
    } else if question.contains("ลงทะเบียน") || question.contains("Demand") || question.contains("รอทำสัญญา") {
        let rows: Vec<Value> = BRANCHES
            .iter()
            .map(|branch| {
                json!({
                    "branch": branch,
                    "registrations": rng.gen_range(50..900),
                })
            })
            .collect();
        let total: i64 = rows
            .iter()
            .map(|r| r["registrations"].as_i64().unwrap())
            .sum();

        json!({
            "question": question,
            "answer": format!("มีลูกค้าลงทะเบียนรอทำสัญญา iPhone ทั้งหมด {} คน", total),
            "sql": "SELECT branch, COUNT(*) AS registrations FROM registrations WHERE status = 'waiting' GROUP BY branch",
            "data": rows,
            "metadata": {"row_count": BRANCHES.len(), "columns": ["branch", "registrations"]},
            "structured": {
                "summary": "ยอดลงทะเบียนรวมทุกสาขา",
                "key_metrics": [
                    {"label": "Total Demand", "value": total.to_string(), "unit": "คน"}
                ],
            },
        })
    } else if question.contains("Conversion") || question.contains("สัญญา") {
        let rate = rng.gen_range(35..70);

        json!({
            "question": question,
            "answer": format!("Conversion Rate จากการลงทะเบียนเป็นสัญญาอยู่ที่ {}%", rate),
            "sql": "SELECT COUNT(contract_id) * 100.0 / COUNT(registration_id) AS conversion_rate FROM registrations LEFT JOIN contracts USING (registration_id)",
            "data": [{"conversion_rate": rate}],
            "metadata": {"row_count": 1, "columns": ["conversion_rate"]},
        })
    } else {
        json!({
            "question": question,
            "answer": "ยังไม่มีข้อมูลสำหรับคำถามนี้ ลองถามเกี่ยวกับการลงทะเบียน สต็อค หรือสัญญา",
        })
    }
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();
    let delay_ms = args.delay_ms;

    // POST /query
    let query = warp::path("query")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: QueryBody| async move {
            log::info!("🔍 query: {}", body.question);
            // コールドスタート気分を出すための遅延
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            Ok::<_, warp::Rejection>(warp::reply::json(&build_response(&body.question)))
        });

    // GET /schema
    let schema = warp::path("schema").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "tables": {
                "registrations": ["registration_id", "customer", "model", "branch", "status", "created_at"],
                "inventory": ["model", "branch", "status", "updated_at"],
                "contracts": ["contract_id", "registration_id", "value", "signed_at"],
            }
        }))
    });

    // GET /examples
    let examples = warp::path("examples").and(warp::get()).map(|| {
        warp::reply::json(&json!([
            "มีลูกค้าลงทะเบียนรอทำสัญญา iPhone กี่คน",
            "มีสต็อค iPhone พร้อมส่งมอบกี่เครื่อง",
            "Conversion Rate: Registration → Contract",
        ]))
    });

    // GET / (liveness)
    let root = warp::path::end().and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "status": "ok",
            "service": "mock analytics backend",
            "time": chrono::Utc::now().to_rfc3339(),
        }))
    });

    let routes = query.or(schema).or(examples).or(root);

    log::info!("🚀 mock analytics backend listening on 127.0.0.1:{}", args.port);
    warp::serve(routes).run(([127, 0, 0, 1], args.port)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_question_returns_inventory_rows() {
        let response = build_response("มีสต็อค iPhone พร้อมส่งมอบกี่เครื่อง");

        assert!(response["answer"].as_str().unwrap().contains("สต็อค"));
        assert_eq!(response["data"].as_array().unwrap().len(), MODELS.len());
        assert_eq!(response["metadata"]["columns"][0], "model");
    }

    #[test]
    fn test_demand_question_returns_structured_metrics() {
        let response = build_response("มีลูกค้าลงทะเบียนรอทำสัญญา iPhone กี่คน");

        assert!(response["sql"].as_str().unwrap().contains("registrations"));
        assert!(response["structured"]["key_metrics"].is_array());
    }

    #[test]
    fn test_unknown_question_has_answer_only() {
        let response = build_response("อากาศวันนี้เป็นอย่างไร");

        assert!(response["answer"].is_string());
        assert!(response.get("sql").is_none());
        assert!(response.get("data").is_none());
    }
}
