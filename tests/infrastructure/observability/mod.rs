mod request_id_test;
mod transcript_redaction_test;
