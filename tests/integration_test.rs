/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned answers for the two calls the binary makes.
struct Responses {
	currency_list: (u16, &'static str),
	rates: (u16, &'static str),
}

/// Starts a throwaway HTTP responder on localhost that answers like the rate
/// source. Returns its URL and the request lines it received.
fn serve(responses: Responses) -> (String, Arc<Mutex<Vec<String>>>) {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let url = format!("http://{}/api/", listener.local_addr().unwrap());
	let seen = Arc::new(Mutex::new(Vec::new()));
	let log = Arc::clone(&seen);

	thread::spawn(move || {
		for stream in listener.incoming() {
			let Ok(mut stream) = stream else { continue };
			let mut reader = BufReader::new(stream.try_clone().unwrap());

			let mut request_line = String::new();
			reader.read_line(&mut request_line).unwrap();
			loop {
				let mut header = String::new();
				if reader.read_line(&mut header).unwrap() == 0
					|| header == "\r\n"
				{
					break;
				}
			}

			let (status, body) = if request_line.contains("get=rates") {
				responses.rates
			} else {
				responses.currency_list
			};
			log.lock().unwrap().push(request_line.trim().to_string());

			let reply = format!(
				"HTTP/1.1 {} X\r\nContent-Type: application/json\r\n\
				 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
				status,
				body.len(),
				body
			);
			let _ = stream.write_all(reply.as_bytes());
		}
	});

	(url, seen)
}

/// Runs the binary in `dir` with a clean environment plus `vars`.
fn run(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_currates"))
		.current_dir(dir)
		.env_clear()
		.envs(vars.iter().copied())
		.args(args)
		.output()
		.expect("Failed to execute process")
}

fn empty_config(dir: &Path) -> PathBuf {
	let path = dir.join("config.toml");
	fs::write(&path, "").unwrap();
	path
}

const CURRENCY_LIST: &str =
	r#"{"status":200,"message":"list","data":["USDRUB","USDKZT","EURRUB"]}"#;

#[test]
fn test_no_arguments_prints_usage() {
	let dir = tempfile::tempdir().unwrap();
	let output = run(dir.path(), &[], &[]);

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_extra_arguments_rejected() {
	let dir = tempfile::tempdir().unwrap();
	let output = run(dir.path(), &["a.json", "b.json"], &[]);

	assert!(!output.status.success());
	assert!(!dir.path().join("a.json").exists());
}

#[test]
fn test_missing_api_key_fails_without_output() {
	let dir = tempfile::tempdir().unwrap();
	let config = empty_config(dir.path());
	let out = dir.path().join("rates.json");

	let output = run(
		dir.path(),
		&[out.to_str().unwrap(), "--config", config.to_str().unwrap()],
		&[],
	);

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("API key"));
	assert!(!out.exists());
}

#[test]
fn test_full_run_writes_rates() {
	let (url, seen) = serve(Responses {
		currency_list: (200, CURRENCY_LIST),
		rates: (
			200,
			r#"{"status":200,"message":"rates","data":{"USDRUB":"90.0","USDKZT":"450.0"}}"#,
		),
	});
	let dir = tempfile::tempdir().unwrap();
	let config = empty_config(dir.path());
	let out = dir.path().join("rates.json");

	let output = run(
		dir.path(),
		&[out.to_str().unwrap(), "--config", config.to_str().unwrap()],
		&[
			("API_KEY", "secret"),
			("API_URL", url.as_str()),
			("DONATIONS", "RUB,USD,KZT,XYZ"),
			("FALLBACK", "PLNRUB:21.5"),
		],
	);

	assert!(
		output.status.success(),
		"run failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	assert_eq!(
		fs::read_to_string(&out).unwrap(),
		r#"{"KZTRUB":0.2,"PLNRUB":21.5,"USDRUB":90.0}"#
	);

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Calculated KZTRUB via USD"));
	assert!(stderr.contains("Pair not available via direct or USD/EUR: XYZ"));
	assert!(
		stderr.contains("Currency equals default, cannot form a pair: RUB")
	);

	let seen = seen.lock().unwrap();
	assert_eq!(seen.len(), 2);
	assert!(seen[0].contains("get=currency_list"));
	assert!(seen[0].contains("key=secret"));
	assert!(seen[1].contains("get=rates"));
	assert!(seen[1].contains("pairs=USDRUB%2CUSDKZT"));
}

#[test]
fn test_summary_table() {
	let (url, _) = serve(Responses {
		currency_list: (200, CURRENCY_LIST),
		rates: (
			200,
			r#"{"status":200,"data":{"USDRUB":90,"USDKZT":450}}"#,
		),
	});
	let dir = tempfile::tempdir().unwrap();
	let config = dir.path().join("config.toml");
	fs::write(
		&config,
		format!(
			"api_key = \"secret\"\napi_url = \"{}\"\ncurrencies = [\"KZT\"]\n\
			 [fallback]\n",
			url
		),
	)
	.unwrap();
	let out = dir.path().join("rates.json");

	let output = run(
		dir.path(),
		&[
			out.to_str().unwrap(),
			"--config",
			config.to_str().unwrap(),
			"--summary",
			"-q",
		],
		&[],
	);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("KZTRUB"));
	assert!(stdout.contains("via USD"));
	assert!(stdout.contains("source"));
	assert_eq!(
		fs::read_to_string(&out).unwrap(),
		r#"{"KZTRUB":0.2,"USDRUB":90.0}"#
	);
}

#[test]
fn test_rates_failure_writes_nothing() {
	let (url, _) = serve(Responses {
		currency_list: (200, CURRENCY_LIST),
		rates: (500, r#"{"status":500}"#),
	});
	let dir = tempfile::tempdir().unwrap();
	let config = empty_config(dir.path());
	let out = dir.path().join("rates.json");

	let output = run(
		dir.path(),
		&[out.to_str().unwrap(), "--config", config.to_str().unwrap()],
		&[
			("API_KEY", "secret"),
			("API_URL", url.as_str()),
			("DONATIONS", "USD"),
		],
	);

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr)
		.contains("currency failed to get"));
	assert!(!out.exists());
}

#[test]
fn test_zero_quote_writes_nothing() {
	let (url, _) = serve(Responses {
		currency_list: (200, CURRENCY_LIST),
		rates: (
			200,
			r#"{"status":200,"data":{"USDRUB":"90","USDKZT":"0"}}"#,
		),
	});
	let dir = tempfile::tempdir().unwrap();
	let config = empty_config(dir.path());
	let out = dir.path().join("rates.json");

	let output = run(
		dir.path(),
		&[out.to_str().unwrap(), "--config", config.to_str().unwrap()],
		&[
			("API_KEY", "secret"),
			("API_URL", url.as_str()),
			("DONATIONS", "KZT"),
		],
	);

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("zero"));
	assert!(!out.exists());
}

#[test]
fn test_unreachable_listing_still_writes_fallbacks() {
	// bind then drop, so nothing is listening on this port
	let port = TcpListener::bind("127.0.0.1:0")
		.unwrap()
		.local_addr()
		.unwrap()
		.port();
	let url = format!("http://127.0.0.1:{}/api/", port);
	let dir = tempfile::tempdir().unwrap();
	let config = empty_config(dir.path());
	let out = dir.path().join("rates.json");

	let output = run(
		dir.path(),
		&[out.to_str().unwrap(), "--config", config.to_str().unwrap()],
		&[
			("API_KEY", "secret"),
			("API_URL", url.as_str()),
			("DONATIONS", "PLN"),
		],
	);

	assert!(
		output.status.success(),
		"run failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	assert_eq!(
		fs::read_to_string(&out).unwrap(),
		r#"{"BLRRUB":14.0,"PLNRUB":21.5}"#
	);
}
