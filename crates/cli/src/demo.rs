use crate::di::DnsServices;
use crate::output;
use anyhow::Context;
use ferrous_resolver_domain::RecordType;

const DEMO_QUERIES: [(&str, RecordType); 6] = [
    ("google.com", RecordType::A),
    ("google.com", RecordType::AAAA),
    ("google.com", RecordType::MX),
    ("gmail.com", RecordType::TXT),
    ("www.github.com", RecordType::CNAME),
    ("8.8.8.8", RecordType::PTR),
];

const DEMO_TRACE: (&str, RecordType) = ("www.example.com", RecordType::A);

/// Sample lookups: one direct query per common record type, then a trace.
pub async fn run(services: &DnsServices) -> anyhow::Result<()> {
    for (domain, record_type) in DEMO_QUERIES {
        println!("\n=== {} {} ===", domain, record_type);
        let message = services
            .query
            .execute(domain, record_type)
            .await
            .with_context(|| format!("query for {} {} failed", domain, record_type))?;
        print!("{}", output::render_message(&message));
    }

    let (domain, record_type) = DEMO_TRACE;
    println!("\nTracing DNS resolution for {} ({})...", domain, record_type);
    let result = services
        .trace
        .execute(domain, record_type)
        .await
        .with_context(|| format!("trace for {} {} failed", domain, record_type))?;
    print!("{}", output::render_trace(&result));

    Ok(())
}
