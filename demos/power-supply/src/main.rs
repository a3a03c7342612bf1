//! An in-memory power supply driven through a bound `PowerSupply`
//! interface.
//!
//! The device declares the `On`, `Off` and `Ramp` commands together with
//! the `Voltage`, `Current` and `OutputOn` attributes. The interface mixes
//! command names with `get`, `is` and `set` accessor methods, so binding
//! exercises every routing rule.

use std::cell::RefCell;
use std::time::{SystemTime, UNIX_EPOCH};

use aida::code::TypeCode;
use aida::format::FormatKind;
use aida::quality::Quality;
use aida::value::{TimedValue, Value};

use aida_client::adapter::{DeviceAdapter, Interface};
use aida_client::error::{Error, ErrorKind, Result};
use aida_client::proxy::DeviceProxy;
use aida_client::resolver;

use hashbrown::HashMap;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}

struct PowerSupply {
    name: String,
    attributes: RefCell<HashMap<String, Value>>,
}

impl PowerSupply {
    fn new(name: &str) -> Self {
        let mut attributes = HashMap::new();
        let _ = attributes.insert("Voltage".to_owned(), Value::Double(0.0));
        let _ = attributes.insert("Current".to_owned(), Value::Double(0.0));
        let _ = attributes.insert("OutputOn".to_owned(), Value::Short(0));

        Self {
            name: name.to_owned(),
            attributes: RefCell::new(attributes),
        }
    }

    fn store(&self, attribute: &str, value: Value) {
        let _ = self
            .attributes
            .borrow_mut()
            .insert(attribute.to_owned(), value);
    }
}

impl DeviceProxy for PowerSupply {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_command(&self, command: &str) -> Result<bool> {
        Ok(matches!(command, "On" | "Off" | "Ramp"))
    }

    fn has_attribute(&self, attribute: &str) -> Result<bool> {
        Ok(self.attributes.borrow().contains_key(attribute))
    }

    fn execute_command(&self, command: &str, argument: Option<&Value>) -> Result<Option<Value>> {
        match command {
            "On" => {
                self.store("OutputOn", Value::Short(1));
                Ok(None)
            }
            "Off" => {
                self.store("OutputOn", Value::Short(0));
                Ok(None)
            }
            "Ramp" => {
                let Some(target) = argument.and_then(Value::as_double) else {
                    return Err(Error::new(
                        ErrorKind::Execute,
                        "The command `Ramp` needs a target voltage.",
                    ));
                };
                self.store("Voltage", Value::Double(target));
                Ok(Some(Value::Double(target)))
            }
            _ => Err(Error::no_such_command(command)),
        }
    }

    fn read_attribute(&self, attribute: &str) -> Result<Value> {
        self.attributes
            .borrow()
            .get(attribute)
            .cloned()
            .ok_or_else(|| Error::no_such_attribute(attribute))
    }

    fn read_attribute_timed(&self, attribute: &str) -> Result<TimedValue> {
        Ok(TimedValue::new(
            self.read_attribute(attribute)?,
            now_millis(),
            Quality::Valid,
        ))
    }

    fn write_attribute(&self, attribute: &str, value: Option<&Value>) -> Result<()> {
        if !self.attributes.borrow().contains_key(attribute) {
            return Err(Error::no_such_attribute(attribute));
        }

        let Some(value) = value else {
            return Err(Error::new(
                ErrorKind::Write,
                format!("No value provided for the attribute `{attribute}`."),
            ));
        };

        self.store(attribute, value.clone());
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let interface = Interface::from_methods(
        "PowerSupply",
        [
            "On",
            "Off",
            "Ramp",
            "getVoltage",
            "setVoltage",
            "getCurrent",
            "isOutputOn",
        ],
    );

    let adapter = DeviceAdapter::bind(&interface, PowerSupply::new("sys/ps/1"))?;

    println!("Routes of `{}`:", adapter.interface_name());
    for (method, route) in adapter.routes() {
        println!("  {method} -> {route:?}");
    }

    let _ = adapter.invoke("On", &[])?;
    if let Some(output_on) = adapter.invoke("isOutputOn", &[])? {
        println!("Output on: {output_on}");
    }

    let _ = adapter.invoke("setVoltage", &[Value::Double(220.5)])?;
    if let Some(voltage) = adapter.invoke("getVoltage", &[])? {
        println!("Voltage: {voltage}");
    }

    if let Some(reached) = adapter.invoke("Ramp", &[Value::Double(110.0)])? {
        println!("Ramped to: {reached}");
    }

    let timed = adapter.proxy().read_attribute_timed("Voltage")?;
    print!("{timed}");

    let converter = resolver::resolve(FormatKind::Spectrum, TypeCode::Double)?;
    println!(
        "A {} `{}` request travels as `{}` elements.",
        converter.format(),
        converter.element(),
        converter.type_code()
    );

    Ok(())
}
