//! Drives a link against an in-process co-processor emulation.
//!
//! Run with: `cargo run -p sidelink --example loopback`

use std::thread;
use std::time::Duration;

use sidelink::collections::ZString;
use sidelink::engine::{Link, LinkConfig};
use sidelink::stream::{ByteStream, MemoryDuplex};

fn read_line(stream: &mut MemoryDuplex) -> Option<String> {
    let mut line = Vec::new();
    loop {
        match stream.read_byte() {
            Ok(b'\n') => return Some(String::from_utf8_lossy(&line).into_owned()),
            Ok(byte) => line.push(byte),
            Err(_) => return None,
        }
    }
}

fn main() {
    let (host_side, mut device_side) = MemoryDuplex::pair();

    // A minimal co-processor: answers status queries, serves one delegated
    // request, then forwards one inbound request from "the network".
    let device = thread::spawn(move || {
        while let Some(line) = read_line(&mut device_side) {
            match line.split(' ').next().unwrap_or("") {
                "is_connected" => device_side.write_str("is_connected 1\n").unwrap(),
                "get_ip" => device_side.write_str("get_ip 192.168.4.17\n").unwrap(),
                "get" => {
                    device_side
                        .write_str(
                            "response_start\nContent-Type: text/plain\n\n\
                             hello from the network\nresponse_end\n",
                        )
                        .unwrap();
                    device_side
                        .write_str("method GET\npath_frament status\nrespond\n")
                        .unwrap();
                    break;
                }
                _ => {}
            }
        }
    });

    let config = LinkConfig {
        ssid: ZString::from("hangar-2"),
        password: ZString::from("hunter2"),
        ..LinkConfig::default()
    };
    let mut link = Link::new(host_side, config);

    link.init().unwrap();
    link.connect().unwrap();
    println!("connected: {}", link.is_connected().unwrap());
    println!("ip: {}", link.ip_address().unwrap());
    println!("body: {}", link.get("http://example.com/greeting").unwrap());

    loop {
        if let Some(request) = link.poll().unwrap() {
            println!(
                "inbound: {} {} (complete: {})",
                request.method,
                request.path(),
                request.complete
            );
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    device.join().unwrap();
}
