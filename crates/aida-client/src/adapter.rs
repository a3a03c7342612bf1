use aida::value::Value;

use hashbrown::DefaultHashBuilder;

use indexmap::map::IndexMap;
use indexmap::set::IndexSet;

use tracing::{error, warn};

use crate::error::{Error, ErrorKind, Result};
use crate::proxy::DeviceProxy;

/// A named list of methods a device interface exposes.
///
/// An interface only describes names. What each method does on a device is
/// decided when the interface is bound to a proxy, following the routing
/// rules of [`DeviceAdapter::bind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    // Interface name.
    name: String,
    // Method names, kept in declaration order.
    methods: IndexSet<String, DefaultHashBuilder>,
}

impl Interface {
    /// Creates an empty [`Interface`] with the given name.
    #[must_use]
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: IndexSet::default(),
        }
    }

    /// Constructs an [`Interface`] from an array of method names.
    #[must_use]
    #[inline]
    pub fn from_methods<const N: usize>(name: impl Into<String>, methods: [&str; N]) -> Self {
        let mut interface = Self::new(name);
        for method in methods {
            interface = interface.method(method);
        }
        interface
    }

    /// Adds a method to the [`Interface`].
    ///
    /// Adding a method twice keeps a single entry.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        let _ = self.methods.insert(method.into());
        self
    }

    /// Returns the interface name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns an iterator over the method names in declaration order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }
}

/// The device operation a bound method resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodRoute {
    /// The method executes the named device command.
    Command(String),
    /// The method reads the named device attribute.
    ReadAttribute(String),
    /// The method writes the named device attribute.
    WriteAttribute(String),
}

/// An adapter implementing a device interface on top of one proxy.
///
/// Binding resolves every interface method onto a [`MethodRoute`] once.
/// Invocations then consult the route table only, so the per-call work is a
/// single lookup followed by the proxy operation. The adapter carries no
/// state across calls: it is safe to invoke concurrently whenever the
/// underlying proxy is.
#[derive(Debug)]
pub struct DeviceAdapter<P: DeviceProxy> {
    // Name of the bound interface.
    interface_name: String,
    // Session with the remote device.
    proxy: P,
    // Method routes, kept in interface declaration order.
    routes: IndexMap<String, MethodRoute, DefaultHashBuilder>,
}

impl<P: DeviceProxy> DeviceAdapter<P> {
    /// Binds an [`Interface`] to a proxy, resolving every method onto a
    /// [`MethodRoute`].
    ///
    /// Routing follows this priority order for a method name:
    ///
    /// 1. A name the device declares as a command executes that command.
    /// 2. A name starting with `get` reads the attribute named after the
    ///    prefix.
    /// 3. A name starting with `is` reads the attribute named after the
    ///    prefix.
    /// 4. A name starting with `set` writes the attribute named after the
    ///    prefix.
    ///
    /// The command check always wins: a device command named `getStatus`
    /// shadows the `Status` attribute read the prefix would produce.
    ///
    /// # Errors
    ///
    /// An error is returned when the device surface cannot be inspected or
    /// when a method matches neither a command nor an attribute access. A
    /// bare `get`, `is` or `set` with no attribute name after it does not
    /// route.
    pub fn bind(interface: &Interface, proxy: P) -> Result<Self> {
        let mut routes = IndexMap::default();
        for method in interface.method_names() {
            let route = route_method(&proxy, method)?;
            let _ = routes.insert(method.to_owned(), route);
        }

        Ok(Self {
            interface_name: interface.name().to_owned(),
            proxy,
            routes,
        })
    }

    /// Invokes a bound method, forwarding the first argument when the route
    /// takes one.
    ///
    /// Command routes return the command result, read routes return the
    /// attribute value and write routes return no value. Surplus arguments
    /// are discarded with a warning.
    ///
    /// # Errors
    ///
    /// An error is returned when the interface does not declare the method
    /// or when the proxy operation fails. When the device no longer declares
    /// the command or attribute the method was routed onto at binding time,
    /// the error is escalated to an
    /// [`Inconsistency`](ErrorKind::Inconsistency).
    pub fn invoke(&self, method: &str, arguments: &[Value]) -> Result<Option<Value>> {
        let Some(route) = self.routes.get(method) else {
            return Err(Error::new(
                ErrorKind::Dispatch,
                format!(
                    "The interface `{}` does not declare the method `{method}`.",
                    self.interface_name
                ),
            ));
        };

        if arguments.len() > 1 {
            warn!(
                "The method `{method}` received {} arguments, only the first one is forwarded.",
                arguments.len()
            );
        }
        let argument = arguments.first();

        match route {
            MethodRoute::Command(command) => self.run_command(command, argument),
            MethodRoute::ReadAttribute(attribute) => self.run_read(attribute),
            MethodRoute::WriteAttribute(attribute) => self.run_write(attribute, argument),
        }
    }

    /// Returns the name of the bound interface.
    #[must_use]
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Returns the proxy behind the adapter.
    #[must_use]
    pub const fn proxy(&self) -> &P {
        &self.proxy
    }

    /// Returns the [`MethodRoute`] of the given method, when the interface
    /// declares it.
    #[must_use]
    pub fn route(&self, method: &str) -> Option<&MethodRoute> {
        self.routes.get(method)
    }

    /// Returns an iterator over the bound methods and their routes in
    /// interface declaration order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &MethodRoute)> {
        self.routes.iter().map(|(method, route)| (method.as_str(), route))
    }

    fn run_command(&self, command: &str, argument: Option<&Value>) -> Result<Option<Value>> {
        self.proxy
            .execute_command(command, argument)
            .map_err(|e| self.escalate(e, ErrorKind::NoSuchCommand, "command", command))
    }

    fn run_read(&self, attribute: &str) -> Result<Option<Value>> {
        self.proxy
            .read_attribute(attribute)
            .map(Some)
            .map_err(|e| self.escalate(e, ErrorKind::NoSuchAttribute, "attribute", attribute))
    }

    fn run_write(&self, attribute: &str, value: Option<&Value>) -> Result<Option<Value>> {
        self.proxy
            .write_attribute(attribute, value)
            .map(|()| None)
            .map_err(|e| self.escalate(e, ErrorKind::NoSuchAttribute, "attribute", attribute))
    }

    // Turns a vanished routing target into an inconsistency defect, leaving
    // every other failure untouched.
    fn escalate(&self, error: Error, vanished: ErrorKind, target: &str, name: &str) -> Error {
        if error.kind() != vanished {
            return error;
        }

        let escalated = Error::new(
            ErrorKind::Inconsistency,
            format!(
                "The device `{}` routed the {target} `{name}` but no longer declares it.",
                self.proxy.name()
            ),
        );
        error!("{escalated}");
        escalated
    }
}

fn route_method<P: DeviceProxy>(proxy: &P, method: &str) -> Result<MethodRoute> {
    if proxy.has_command(method)? {
        return Ok(MethodRoute::Command(method.to_owned()));
    }

    if let Some(attribute) =
        strip_routing_prefix(method, "get").or_else(|| strip_routing_prefix(method, "is"))
    {
        return Ok(MethodRoute::ReadAttribute(attribute.to_owned()));
    }

    if let Some(attribute) = strip_routing_prefix(method, "set") {
        return Ok(MethodRoute::WriteAttribute(attribute.to_owned()));
    }

    Err(Error::new(
        ErrorKind::Dispatch,
        format!("The method `{method}` matches neither a command nor an attribute access."),
    ))
}

fn strip_routing_prefix<'a>(method: &'a str, prefix: &str) -> Option<&'a str> {
    method
        .strip_prefix(prefix)
        .filter(|attribute| !attribute.is_empty())
}

#[cfg(test)]
mod tests {
    use aida::value::Value;

    use serde_json::json;

    use crate::error::{Error, ErrorKind};
    use crate::tests::{ScriptedDevice, init_tracing};

    use super::{DeviceAdapter, Interface, MethodRoute};

    fn power_supply() -> ScriptedDevice {
        ScriptedDevice::new("sys/ps/1")
            .command("On", None)
            .command("Off", None)
            .attribute("Voltage", Value::Double(220.5))
            .attribute("OutputOn", Value::Short(1))
    }

    fn power_supply_interface() -> Interface {
        Interface::from_methods(
            "PowerSupply",
            ["On", "Off", "getVoltage", "setVoltage", "isOutputOn"],
        )
    }

    #[test]
    fn interface_collapses_duplicate_methods() {
        let interface = Interface::new("PowerSupply")
            .method("getVoltage")
            .method("getVoltage");

        assert_eq!(interface.name(), "PowerSupply");
        assert_eq!(interface.method_names().count(), 1);
    }

    #[test]
    fn binding_routes_every_method() {
        let adapter = DeviceAdapter::bind(&power_supply_interface(), power_supply()).unwrap();

        assert_eq!(adapter.interface_name(), "PowerSupply");
        assert_eq!(
            adapter.route("On"),
            Some(&MethodRoute::Command("On".into()))
        );
        assert_eq!(
            adapter.route("getVoltage"),
            Some(&MethodRoute::ReadAttribute("Voltage".into()))
        );
        assert_eq!(
            adapter.route("isOutputOn"),
            Some(&MethodRoute::ReadAttribute("OutputOn".into()))
        );
        assert_eq!(
            adapter.route("setVoltage"),
            Some(&MethodRoute::WriteAttribute("Voltage".into()))
        );
        assert_eq!(adapter.route("frobnicate"), None);
        assert_eq!(adapter.routes().count(), 5);
    }

    #[test]
    fn command_check_wins_over_prefix_routing() {
        let device = power_supply().command("getStatus", Some(Value::String("ON".into())));
        let interface = Interface::from_methods("PowerSupply", ["getStatus"]);

        let adapter = DeviceAdapter::bind(&interface, device).unwrap();
        assert_eq!(
            adapter.route("getStatus"),
            Some(&MethodRoute::Command("getStatus".into()))
        );
        assert_eq!(
            adapter.invoke("getStatus", &[]).unwrap(),
            Some(Value::String("ON".into()))
        );
    }

    #[test]
    fn unroutable_method_fails_binding() {
        let interface = Interface::from_methods("PowerSupply", ["frobnicate"]);

        let error = DeviceAdapter::bind(&interface, power_supply()).unwrap_err();
        assert_eq!(
            error,
            Error::new(
                ErrorKind::Dispatch,
                "The method `frobnicate` matches neither a command nor an attribute access."
            )
        );
    }

    #[test]
    fn bare_prefix_method_fails_binding() {
        for method in ["get", "is", "set"] {
            let interface = Interface::from_methods("PowerSupply", [method]);

            let error = DeviceAdapter::bind(&interface, power_supply()).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Dispatch);
        }
    }

    #[test]
    fn get_method_reads_the_attribute() {
        let adapter = DeviceAdapter::bind(&power_supply_interface(), power_supply()).unwrap();

        assert_eq!(
            adapter.invoke("getVoltage", &[]).unwrap(),
            Some(Value::Double(220.5))
        );
    }

    #[test]
    fn is_method_reads_the_attribute() {
        let adapter = DeviceAdapter::bind(&power_supply_interface(), power_supply()).unwrap();

        assert_eq!(
            adapter.invoke("isOutputOn", &[]).unwrap(),
            Some(Value::Short(1))
        );
    }

    #[test]
    fn issue_method_reads_the_sue_attribute() {
        // The `is` prefix is purely syntactic.
        let device = ScriptedDevice::new("sys/ps/1").attribute("sue", Value::Long(7));
        let interface = Interface::from_methods("Quirks", ["issue"]);

        let adapter = DeviceAdapter::bind(&interface, device).unwrap();
        assert_eq!(
            adapter.route("issue"),
            Some(&MethodRoute::ReadAttribute("sue".into()))
        );
        assert_eq!(adapter.invoke("issue", &[]).unwrap(), Some(Value::Long(7)));
    }

    #[test]
    fn set_method_writes_and_returns_no_value() {
        let adapter = DeviceAdapter::bind(&power_supply_interface(), power_supply()).unwrap();

        assert_eq!(
            adapter
                .invoke("setVoltage", &[Value::Double(110.0)])
                .unwrap(),
            None
        );
        assert_eq!(
            adapter.proxy().attribute_value("Voltage"),
            Some(Value::Double(110.0))
        );
    }

    #[test]
    fn write_without_a_value_is_refused_by_the_device() {
        let adapter = DeviceAdapter::bind(&power_supply_interface(), power_supply()).unwrap();

        let error = adapter.invoke("setVoltage", &[]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Write);
    }

    #[test]
    fn command_argument_is_forwarded() {
        let device = power_supply().echo_command("Ramp");
        let interface = Interface::from_methods("PowerSupply", ["Ramp"]);

        let adapter = DeviceAdapter::bind(&interface, device).unwrap();
        assert_eq!(
            adapter.invoke("Ramp", &[Value::Double(7.5)]).unwrap(),
            Some(Value::Double(7.5))
        );
        assert_eq!(adapter.invoke("Ramp", &[]).unwrap(), None);
    }

    #[test]
    fn surplus_arguments_are_discarded() {
        init_tracing();

        let device = power_supply().echo_command("Ramp");
        let interface = Interface::from_methods("PowerSupply", ["Ramp"]);

        let adapter = DeviceAdapter::bind(&interface, device).unwrap();
        assert_eq!(
            adapter
                .invoke("Ramp", &[Value::Long(1), Value::Long(2), Value::Long(3)])
                .unwrap(),
            Some(Value::Long(1))
        );
    }

    #[test]
    fn undeclared_method_fails_invocation() {
        let adapter = DeviceAdapter::bind(&power_supply_interface(), power_supply()).unwrap();

        let error = adapter.invoke("getCurrent", &[]).unwrap_err();
        assert_eq!(
            error,
            Error::new(
                ErrorKind::Dispatch,
                "The interface `PowerSupply` does not declare the method `getCurrent`."
            )
        );
    }

    #[test]
    fn vanished_command_escalates_to_an_inconsistency() {
        init_tracing();

        let device = power_supply().vanished_command("Calibrate");
        let interface = Interface::from_methods("PowerSupply", ["Calibrate"]);

        let adapter = DeviceAdapter::bind(&interface, device).unwrap();
        let error = adapter.invoke("Calibrate", &[]).unwrap_err();
        assert_eq!(
            error,
            Error::new(
                ErrorKind::Inconsistency,
                "The device `sys/ps/1` routed the command `Calibrate` but no longer declares it."
            )
        );
    }

    #[test]
    fn missing_attribute_read_escalates_to_an_inconsistency() {
        init_tracing();

        // `getPressure` routes syntactically, the device holds no such
        // attribute.
        let interface = Interface::from_methods("PowerSupply", ["getPressure"]);

        let adapter = DeviceAdapter::bind(&interface, power_supply()).unwrap();
        let error = adapter.invoke("getPressure", &[]).unwrap_err();
        assert_eq!(
            error,
            Error::new(
                ErrorKind::Inconsistency,
                "The device `sys/ps/1` routed the attribute `Pressure` but no longer declares it."
            )
        );
    }

    #[test]
    fn missing_attribute_write_escalates_to_an_inconsistency() {
        init_tracing();

        let interface = Interface::from_methods("PowerSupply", ["setPressure"]);

        let adapter = DeviceAdapter::bind(&interface, power_supply()).unwrap();
        let error = adapter
            .invoke("setPressure", &[Value::Double(1.0)])
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Inconsistency);
    }

    #[test]
    fn failed_execution_passes_through_unescalated() {
        let device = power_supply().failing_command("SelfTest");
        let interface = Interface::from_methods("PowerSupply", ["SelfTest"]);

        let adapter = DeviceAdapter::bind(&interface, device).unwrap();
        let error = adapter.invoke("SelfTest", &[]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Execute);
    }

    #[test]
    fn read_values_serialize_for_callers() {
        let adapter = DeviceAdapter::bind(&power_supply_interface(), power_supply()).unwrap();

        let value = adapter.invoke("getVoltage", &[]).unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({ "Double": 220.5 })
        );
    }
}
