//! Captured `artemis` output used across harnesses.
//!
//! Each fixture is a verbatim capture shape of one sub-command, including
//! the connection banner and border noise the parsers must skip.

/// `artemis address show`
pub const ADDRESS_SHOW_OUTPUT: &str = "Connection brokerURL = tcp://localhost:61616\n\
DLQ\n\
ExpiryQueue\n\
\n\
orders\n";

/// `artemis queue create`
pub const QUEUE_CREATE_OUTPUT: &str = "Connection brokerURL = tcp://localhost:61616\n\
Queue [name=orders, address=orders, routingType=ANYCAST, durable=true, purgeOnNoConsumers=false, autoCreateAddress=false, exclusive=false, lastValue=false, lastValueKey=null, nonDestructive=false, consumersBeforeDispatch=0, delayBeforeDispatch=-1, autoCreateAddress=false] created successfully.\n";

/// `artemis queue stat` where queue and address names coincide.
pub const QUEUE_STAT_OUTPUT: &str = "Connection brokerURL = tcp://localhost:61616\n\
|NAME                     |ADDRESS                  |CONSUMER_COUNT |MESSAGE_COUNT |MESSAGES_ADDED |DELIVERING_COUNT |MESSAGES_ACKED |SCHEDULED_COUNT |ROUTING_TYPE |\n\
|DLQ                      |DLQ                      |0              |0             |0              |0                |0              |0               |ANYCAST      |\n\
|ExpiryQueue              |ExpiryQueue              |0              |0             |0              |0                |0              |0               |ANYCAST      |\n\
|orders                   |orders                   |2              |42            |100            |0                |58             |0               |ANYCAST      |\n";

/// `artemis queue stat` with multicast subscriptions, so NAME != ADDRESS.
pub const QUEUE_STAT_MULTICAST_OUTPUT: &str = "Connection brokerURL = tcp://localhost:61616\n\
+-----------------+--------+---------------+--------------+\n\
|NAME             |ADDRESS |CONSUMER_COUNT |MESSAGE_COUNT |\n\
|-----------------|--------|---------------|--------------|\n\
|sub.billing      |prices  |1              |7             |\n\
|sub.audit        |trades  |0              |19            |\n\
+-----------------+--------+---------------+--------------+\n";

/// `artemis perf producer` including progress lines before the summary.
pub const PERF_PRODUCER_OUTPUT: &str = "Connection brokerURL = tcp://10.129.2.15:5672\n\
--- warmup false\n\
--- sent:           4917 msg/sec\n\
--- blocked:           0 msg/sec\n\
--- completed:      4917 msg/sec\n\
--- send delay:     mean:      8.12 us - 50.00%:      6.00 us - 99.00%:     41.00 us\n\
--- SUMMARY\n\
--- result:                 success\n\
--- total sent:                5000\n\
--- total blocked:                0\n\
--- total completed:           5000\n\
--- aggregated send time:      mean:    101.55 us - 50.00%:     42.00 us - 90.00%:    135.00 us - 99.00%:   1343.00 us - max:   7839.00 us\n";

/// `artemis perf client` summary with both send and transfer latencies.
pub const PERF_CLIENT_OUTPUT: &str = "--- SUMMARY\n\
--- result:                 success\n\
--- total sent:                5000\n\
--- total received:            5000\n\
--- aggregated delay send time:  mean:   9.43 us - 50.00%:   8.00 us - 99.00%:  60.00 us\n\
--- aggregated transfer time:    mean: 412.10 us - 50.00%: 389.00 us - 99.00%: 901.00 us\n";

/// Build a `queue stat` table from `(name, address, count)` rows.
pub fn queue_stat_table(rows: &[(&str, &str, u64)]) -> String {
    let mut out = String::from("Connection brokerURL = tcp://localhost:61616\n");
    out.push_str("|NAME |ADDRESS |MESSAGE_COUNT |\n");
    for (name, address, count) in rows {
        out.push_str(&format!("|{name} |{address} |{count} |\n"));
    }
    out
}
