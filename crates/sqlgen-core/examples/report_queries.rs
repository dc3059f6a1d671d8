//! Builds a small reporting script and checks it before printing.
//!
//! Run with `cargo run -p sqlgen-core --example report_queries`.

use sqlgen_core::builder::{
    Create, DropTable, Exists, InnerJoin, Insert, Select, Set, SetOperation, Statement,
    StatementNode,
};
use sqlgen_core::{DiagnosticSink, RenderOptions};

fn main() {
    let paid = Select::aliased("p")
        .select(["invoice_id", "SUM(amount) AS paid"])
        .from(["payments"])
        .group_by(["invoice_id"]);

    let outstanding = Select::new()
        .select(["i.id", "i.customer_id", "i.total - p.paid AS due"])
        .from([InnerJoin::new("invoices i", paid, ["i.id = p.invoice_id"])])
        .where_clause(["i.total > p.paid"]);

    let flagged = Select::new()
        .select(["c.id"])
        .from(["customers c"])
        .where_clause([Exists::new(
            "SELECT 1 FROM disputes d WHERE d.customer_id = c.id",
        )]);

    let script: Vec<Statement> = vec![
        Create::table("tmp_due")
            .temporary()
            .columns(["id INT", "customer_id INT", "due DECIMAL(10, 2)"])
            .into(),
        Insert::table("tmp_due").query(outstanding).into(),
        Set::new("@flagged", "(SELECT COUNT(*) FROM `flagged_customers`)").into(),
        SetOperation::union([
            Select::new().select(["customer_id"]).from(["tmp_due"]),
            flagged,
        ])
        .into(),
        DropTable::table("tmp_due").into(),
    ];

    let options = RenderOptions::default().with_sink(DiagnosticSink::Stderr);
    for statement in &script {
        let sql = statement.render(0, &options);
        println!("{sql}");
    }

    // A deliberately broken fragment, to show what the report looks like.
    let broken = Select::new()
        .select(["name"])
        .from(["users"])
        .where_clause(["name = 'O'Brien'"]);
    for diagnostic in broken.validate() {
        eprintln!("{diagnostic}");
    }
}
